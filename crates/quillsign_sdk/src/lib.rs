mod backoff;
mod client;
mod executor;
mod resources;

pub use backoff::{Jitter, ThreadRngJitter};
pub use client::Client;
pub use quillsign_domain::{
    Account, ApiEnvironment, ClientConfig, CreateDocument, CreateEmbeddedSession,
    CreateSignatureRequest, Document, DocumentStatus, EmbeddedSession, Error, FileAttachment,
    Health, KycShare, KycShareStatus, MediaUpload, RequestOptions, Result, RetryPolicy, ShareKyc,
    SignatureRequest, SignatureRequestStatus, SignatureStatus, Signer, UpdateDocument,
};
pub use resources::{Documents, Embedded, Kyc, Media, Signatures};
