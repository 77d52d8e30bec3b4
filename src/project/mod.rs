//! Project model: config discovery, file membership and output matching
//!
//! | Piece | Question answered |
//! |-------|-------------------|
//! | `discovery` | Which project config governs this file? |
//! | `membership` | Is the file compiled by that project? |
//! | `matcher` | Which emitted output came from the file? |

pub mod discovery;
pub mod matcher;
pub mod membership;

pub use discovery::{find_project_config, is_runnable_script, normalize_path, project_root};
pub use matcher::{rank_candidates, select_best_match, strip_extension, suffix_score, ScoredCandidate};
pub use membership::MembershipCache;
