use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    answer_key::claims::AnswerKeyClaims,
    errors::{AppError, AppResult},
    models::domain::QuizQuestion,
};

/// Signs and verifies the answer key that travels with a rendered quiz.
#[derive(Clone)]
pub struct AnswerKeySigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration_hours: i64,
}

impl AnswerKeySigner {
    pub fn new(secret: &SecretString, expiration_hours: i64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation: Validation::default(),
            expiration_hours,
        }
    }

    pub fn sign(&self, topic: &str, questions: &[QuizQuestion]) -> AppResult<String> {
        let claims = AnswerKeyClaims::new(topic, questions, self.expiration_hours);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to sign answer key: {}", e)))
    }

    pub fn verify(&self, token: &str) -> AppResult<AnswerKeyClaims> {
        decode::<AnswerKeyClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::ValidationError("Quiz has expired, please generate a new one".to_string())
                }
                _ => AppError::ValidationError(format!("Invalid answer key: {}", e)),
            })
    }
}
