pub mod charts;
pub mod layout;
pub mod notify;
pub mod stat_card;
