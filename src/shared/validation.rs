use validator::{Validate, ValidationErrors};

use crate::core::error::AppError;

/// Validate a request DTO, reporting failures under a generic message.
pub fn validate_payload<T: Validate>(dto: &T, message: &str) -> Result<(), AppError> {
    dto.validate()
        .map_err(|errors| AppError::Validation(message.to_string(), describe(&errors)))
}

/// Flatten field errors into "field: message" lines, sorted for stable output.
fn describe(errors: &ValidationErrors) -> Vec<String> {
    let mut details: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{}: {}", field, msg),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();
    details.sort();
    details
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Signup {
        #[validate(email(message = "Invalid email format"))]
        email: String,
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn test_valid_payload_passes() {
        let dto = Signup {
            email: "shopper@example.com".to_string(),
            name: "Sam".to_string(),
        };
        assert!(validate_payload(&dto, "Invalid signup").is_ok());
    }

    #[test]
    fn test_invalid_payload_lists_fields() {
        let dto = Signup {
            email: "not-an-email".to_string(),
            name: String::new(),
        };
        match validate_payload(&dto, "Invalid signup") {
            Err(AppError::Validation(message, details)) => {
                assert_eq!(message, "Invalid signup");
                assert_eq!(
                    details,
                    vec![
                        "email: Invalid email format".to_string(),
                        "name: length".to_string()
                    ]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
