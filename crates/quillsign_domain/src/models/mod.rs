mod account;
mod document;
mod embedded;
mod kyc;
mod media;
mod signature;

pub use account::{Account, Health};
pub use document::{CreateDocument, Document, DocumentStatus, UpdateDocument};
pub use embedded::{CreateEmbeddedSession, EmbeddedSession};
pub use kyc::{KycShare, KycShareStatus, ShareKyc};
pub use media::{FileAttachment, MediaUpload};
pub use signature::{
    CreateSignatureRequest, SignatureRequest, SignatureRequestStatus, SignatureStatus, Signer,
};
