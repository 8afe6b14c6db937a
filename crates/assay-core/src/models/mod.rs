mod axis;
mod claim;
mod document;
mod evidence;

pub use axis::{Axis, PerAxis};
pub use claim::{Claim, ClaimFeatures, CustodyIndicators, UpstreamDetails};
pub use document::ScoreReadyDocument;
pub use evidence::{EvidenceFeatures, EvidenceItem};
