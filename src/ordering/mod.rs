//! Move ordering for the alpha-beta driver.
//!
//! The ranker blends static square values, quadrant parity, mobility and
//! stability estimates, and — deep in the tree — shallow recursive
//! evaluation into a single priority per move, so the driver can explore
//! the most promising children first.

mod ranker;
mod weights;

pub use ranker::{HashHint, HashProbe, OrderingContext, ShallowSearch};
pub use weights::{
    OrderingWeights, HASH_FIRST_SCORE, HASH_SECOND_SCORE, WIPEOUT_SCORE,
};
