//! Pass-through endpoint bindings. Each method shapes a path and payload and
//! hands off to the executor; no logic lives here.

mod documents;
mod embedded;
mod kyc;
mod media;
mod signatures;

pub use documents::Documents;
pub use embedded::Embedded;
pub use kyc::Kyc;
pub use media::Media;
pub use signatures::Signatures;
