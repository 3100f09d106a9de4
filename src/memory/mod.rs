/*
 * Page Replacement Engine
 *
 * High-level module that ties together:
 *  - Memory state (frame_table)
 *  - The policy/mechanism interface (traits)
 *  - The mechanism that serves references (paging_core)
 *  - Eviction policies (policies)
 *  - The public entry point (paging_manager)
 *
 * A run serves a reference sequence against a pool of F frames. Each
 * reference is a hit, a cold miss into a free slot, or a miss that evicts a
 * victim chosen by the policy. Every reference produces one Step.
 */

pub mod frame_table;
pub mod paging_core;
pub mod paging_manager;
pub mod policies;
pub mod traits;
pub mod types;

pub use frame_table::FrameTable;
pub use paging_core::PagingCore;
pub use paging_manager::PagingManager;
pub use traits::{ReferenceCtx, ReplacementPolicy};
pub use types::{FrameFlags, FrameSlot, PageId, ReplacementPolicyKind, SimulationTrace, Step};
