use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tickets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// Payment status is a label only; no payment processing happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

/// A monetary reservation record with a ticket code, independent of RSVP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub venue_id: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
    pub date: DateTime<Utc>,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub amount: f64,
    pub ticket_code: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingCreate {
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub venue_id: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
    pub date: DateTime<Utc>,
    pub amount: f64,
}

impl BookingCreate {
    pub fn into_booking(self) -> Booking {
        Booking {
            user_id: self.user_id,
            user_name: self.user_name,
            venue_id: self.venue_id,
            event_id: self.event_id,
            date: self.date,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Pending,
            amount: self.amount,
            ticket_code: tickets::ticket_code(),
            created_at: Utc::now(),
        }
    }
}
