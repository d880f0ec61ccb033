//! Borrow request types
//!
//! Types for borrow request commands.

use clap::Subcommand;
use equip_core::RequestCard;
use serde::Serialize;
use tabled::Tabled;

use super::helpers::truncate;
use crate::output::StatusCell;

#[derive(Subcommand)]
pub enum RequestsAction {
    /// List your borrow requests
    List,

    /// Create a new borrow request
    Create {
        /// Equipment ID (see `schoolequip equipment list`)
        #[arg(short, long)]
        equipment: String,

        /// Quantity to borrow
        #[arg(short = 'n', long, default_value = "1")]
        quantity: u32,

        /// Purpose of the request
        #[arg(short, long)]
        purpose: String,

        /// First day of the loan (YYYY-MM-DD)
        #[arg(long = "from")]
        borrow_from: String,

        /// Last day of the loan (YYYY-MM-DD)
        #[arg(long = "until")]
        borrow_until: String,

        /// Submit even if the form bounds are not met
        #[arg(long)]
        force: bool,
    },
}

/// Borrow request row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct RequestRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Equipment")]
    pub equipment: String,
    #[tabled(rename = "Qty")]
    pub quantity: u32,
    #[tabled(rename = "Status")]
    pub status: StatusCell,
    #[tabled(rename = "From")]
    pub from: String,
    #[tabled(rename = "Until")]
    pub until: String,
    #[tabled(rename = "Purpose")]
    pub purpose: String,
}

impl From<RequestCard> for RequestRow {
    fn from(card: RequestCard) -> Self {
        Self {
            id: card.id,
            equipment: card.equipment,
            quantity: card.quantity,
            status: StatusCell(card.badge),
            from: card.from,
            until: card.until,
            purpose: truncate(&card.purpose, 40),
        }
    }
}
