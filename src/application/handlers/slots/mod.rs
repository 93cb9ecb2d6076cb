//! Common-slot query handler (the scheduling orchestrator).

mod query_common_slots;

pub use query_common_slots::{CommonSlots, QueryCommonSlotsHandler, QueryCommonSlotsQuery};
