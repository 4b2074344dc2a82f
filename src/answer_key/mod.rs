pub mod claims;
pub mod jwt;

pub use claims::AnswerKeyClaims;
pub use jwt::AnswerKeySigner;
