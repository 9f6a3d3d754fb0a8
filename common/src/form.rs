//! Client-side form state and validation.
//!
//! Every check here runs before any network call; a failed validation
//! aborts the submission with a user-facing message.

use std::fmt;

use serde::Serialize;

use crate::food::SpiceLevel;

/// Minimum accepted password length on the auth forms.
pub const MIN_PASSWORD_LEN: usize = 6;

// ─── Login ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFormError {
    EmailMissing,
    EmailInvalid,
    PasswordMissing,
    PasswordTooShort,
}

impl fmt::Display for LoginFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginFormError::EmailMissing => write!(f, "Please enter your email address"),
            LoginFormError::EmailInvalid => write!(f, "Please enter a valid email address"),
            LoginFormError::PasswordMissing => write!(f, "Please enter your password"),
            LoginFormError::PasswordTooShort => {
                write!(f, "Password must be at least {MIN_PASSWORD_LEN} characters")
            }
        }
    }
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), LoginFormError> {
        if self.email.trim().is_empty() {
            return Err(LoginFormError::EmailMissing);
        }
        if !self.email.contains('@') {
            return Err(LoginFormError::EmailInvalid);
        }
        if self.password.trim().is_empty() {
            return Err(LoginFormError::PasswordMissing);
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(LoginFormError::PasswordTooShort);
        }
        Ok(())
    }
}

// ─── Signup ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub agreed_to_terms: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupError {
    FirstNameMissing,
    LastNameMissing,
    EmailMissing,
    EmailInvalid,
    PhoneMissing,
    PasswordMissing,
    PasswordTooShort,
    PasswordMismatch,
    TermsNotAccepted,
}

impl fmt::Display for SignupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignupError::FirstNameMissing => write!(f, "Please enter your first name"),
            SignupError::LastNameMissing => write!(f, "Please enter your last name"),
            SignupError::EmailMissing => write!(f, "Please enter your email address"),
            SignupError::EmailInvalid => write!(f, "Please enter a valid email address"),
            SignupError::PhoneMissing => write!(f, "Please enter your phone number"),
            SignupError::PasswordMissing => write!(f, "Please enter a password"),
            SignupError::PasswordTooShort => {
                write!(f, "Password must be at least {MIN_PASSWORD_LEN} characters")
            }
            SignupError::PasswordMismatch => write!(f, "Passwords do not match"),
            SignupError::TermsNotAccepted => write!(f, "Please agree to the Terms of Service"),
        }
    }
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), SignupError> {
        if self.first_name.trim().is_empty() {
            return Err(SignupError::FirstNameMissing);
        }
        if self.last_name.trim().is_empty() {
            return Err(SignupError::LastNameMissing);
        }
        if self.email.trim().is_empty() {
            return Err(SignupError::EmailMissing);
        }
        if !self.email.contains('@') {
            return Err(SignupError::EmailInvalid);
        }
        if self.phone.trim().is_empty() {
            return Err(SignupError::PhoneMissing);
        }
        if self.password.trim().is_empty() {
            return Err(SignupError::PasswordMissing);
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(SignupError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        if !self.agreed_to_terms {
            return Err(SignupError::TermsNotAccepted);
        }
        Ok(())
    }
}

// ─── Add food ────────────────────────────────────────────────────────────────

/// Raw state of the admin create form. Numeric fields stay as the entered
/// strings until `clean` coerces them.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub discount_price: String,
    pub category: String,
    pub cuisine: String,
    pub image: String,
    pub images: Vec<String>,
    pub is_available: bool,
    pub is_veg: bool,
    pub calories: String,
    pub preparation_time: String,
    pub spice_level: SpiceLevel,
    pub ingredients: Vec<String>,
    pub portion_size: String,
    pub restaurant_id: String,
}

impl Default for FoodForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            discount_price: String::new(),
            category: String::new(),
            cuisine: String::new(),
            image: String::new(),
            images: vec![String::new()],
            is_available: true,
            is_veg: false,
            calories: String::new(),
            preparation_time: String::new(),
            spice_level: SpiceLevel::Low,
            ingredients: vec![String::new()],
            portion_size: String::new(),
            restaurant_id: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoodFormError {
    /// Required fields left blank, in form order.
    MissingFields(Vec<&'static str>),
    NonPositivePrice,
    DiscountNotBelowPrice,
    /// A numeric field that does not parse.
    InvalidNumber(&'static str),
}

impl fmt::Display for FoodFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoodFormError::MissingFields(fields) => {
                write!(f, "Please fill in: {}", fields.join(", "))
            }
            FoodFormError::NonPositivePrice => write!(f, "Price must be greater than 0"),
            FoodFormError::DiscountNotBelowPrice => {
                write!(f, "Discount price must be less than original price")
            }
            FoodFormError::InvalidNumber(field) => {
                write!(f, "Please enter a valid number for {field}")
            }
        }
    }
}

/// The cleaned creation payload POSTed to the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFood {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub discount_price: Option<f64>,
    pub category: String,
    pub cuisine: String,
    pub image: String,
    pub images: Vec<String>,
    pub is_available: bool,
    pub is_veg: bool,
    pub calories: Option<u32>,
    pub preparation_time: Option<u32>,
    pub spice_level: SpiceLevel,
    pub ingredients: Vec<String>,
    pub portion_size: String,
    pub restaurant_id: String,
}

impl FoodForm {
    /// Validate and coerce into the POST payload: numerics parsed, blank
    /// array entries dropped.
    pub fn clean(&self) -> Result<NewFood, FoodFormError> {
        let mut missing = Vec::new();
        for (label, value) in [
            ("name", &self.name),
            ("price", &self.price),
            ("category", &self.category),
            ("cuisine", &self.cuisine),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                missing.push(label);
            }
        }
        if !missing.is_empty() {
            return Err(FoodFormError::MissingFields(missing));
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| FoodFormError::InvalidNumber("price"))?;
        if price <= 0.0 {
            return Err(FoodFormError::NonPositivePrice);
        }

        let discount_price = parse_optional_f64(&self.discount_price, "discount price")?;
        if let Some(discount) = discount_price {
            if discount >= price {
                return Err(FoodFormError::DiscountNotBelowPrice);
            }
        }

        let calories = parse_optional_u32(&self.calories, "calories")?;
        let preparation_time = parse_optional_u32(&self.preparation_time, "preparation time")?;

        Ok(NewFood {
            name: self.name.clone(),
            description: self.description.clone(),
            price,
            discount_price,
            category: self.category.clone(),
            cuisine: self.cuisine.clone(),
            image: self.image.clone(),
            images: non_blank(&self.images),
            is_available: self.is_available,
            is_veg: self.is_veg,
            calories,
            preparation_time,
            spice_level: self.spice_level,
            ingredients: non_blank(&self.ingredients),
            portion_size: self.portion_size.clone(),
            restaurant_id: self.restaurant_id.clone(),
        })
    }
}

fn parse_optional_f64(raw: &str, field: &'static str) -> Result<Option<f64>, FoodFormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| FoodFormError::InvalidNumber(field))
}

fn parse_optional_u32(raw: &str, field: &'static str) -> Result<Option<u32>, FoodFormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| FoodFormError::InvalidNumber(field))
}

fn non_blank(values: &[String]) -> Vec<String> {
    values
        .iter()
        .filter(|value| !value.trim().is_empty())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_food_form() -> FoodForm {
        FoodForm {
            name: "Margherita Pizza".into(),
            description: "Wood-fired classic".into(),
            price: "299".into(),
            category: "Pizza".into(),
            cuisine: "Italian".into(),
            image: "https://img.example/pizza.jpg".into(),
            ingredients: vec!["tomato".into(), "".into(), "basil".into()],
            images: vec!["https://img.example/a.jpg".into(), "  ".into()],
            ..FoodForm::default()
        }
    }

    #[test]
    fn missing_required_fields_reported_in_order() {
        let form = FoodForm::default();
        match form.clean().unwrap_err() {
            FoodFormError::MissingFields(fields) => {
                assert_eq!(
                    fields,
                    vec!["name", "price", "category", "cuisine", "description"]
                );
            }
            other => panic!("expected MissingFields, got {other:?}"),
        }

        let form = FoodForm {
            price: "100".into(),
            ..filled_food_form()
        };
        assert!(form.clean().is_ok());
    }

    #[test]
    fn missing_fields_message_lists_names() {
        let err = FoodFormError::MissingFields(vec!["name", "price"]);
        assert_eq!(err.to_string(), "Please fill in: name, price");
    }

    #[test]
    fn price_must_be_positive() {
        let mut form = filled_food_form();
        form.price = "0".into();
        assert_eq!(form.clean().unwrap_err(), FoodFormError::NonPositivePrice);

        form.price = "-5".into();
        assert_eq!(form.clean().unwrap_err(), FoodFormError::NonPositivePrice);

        form.price = "abc".into();
        assert_eq!(
            form.clean().unwrap_err(),
            FoodFormError::InvalidNumber("price")
        );
    }

    #[test]
    fn discount_must_be_below_price() {
        let mut form = filled_food_form();
        form.discount_price = "299".into();
        assert_eq!(
            form.clean().unwrap_err(),
            FoodFormError::DiscountNotBelowPrice
        );

        form.discount_price = "249.5".into();
        let cleaned = form.clean().unwrap();
        assert_eq!(cleaned.discount_price, Some(249.5));

        form.discount_price = String::new();
        assert_eq!(form.clean().unwrap().discount_price, None);
    }

    #[test]
    fn clean_coerces_numbers_and_drops_blank_entries() {
        let mut form = filled_food_form();
        form.calories = " 850 ".into();
        form.preparation_time = "25".into();
        let cleaned = form.clean().unwrap();

        assert_eq!(cleaned.price, 299.0);
        assert_eq!(cleaned.calories, Some(850));
        assert_eq!(cleaned.preparation_time, Some(25));
        assert_eq!(cleaned.ingredients, vec!["tomato", "basil"]);
        assert_eq!(cleaned.images, vec!["https://img.example/a.jpg"]);
    }

    #[test]
    fn payload_serializes_camel_case() {
        let cleaned = filled_food_form().clean().unwrap();
        let json = serde_json::to_string(&cleaned).unwrap();
        assert!(json.contains("\"isVeg\":false"));
        assert!(json.contains("\"isAvailable\":true"));
        assert!(json.contains("\"spiceLevel\":\"Low\""));
        assert!(json.contains("\"discountPrice\":null"));
    }

    #[test]
    fn login_form_rules() {
        let mut form = LoginForm::default();
        assert_eq!(form.validate(), Err(LoginFormError::EmailMissing));

        form.email = "not-an-email".into();
        assert_eq!(form.validate(), Err(LoginFormError::EmailInvalid));

        form.email = "admin@foodnest.com".into();
        assert_eq!(form.validate(), Err(LoginFormError::PasswordMissing));

        form.password = "123".into();
        assert_eq!(form.validate(), Err(LoginFormError::PasswordTooShort));

        form.password = "admin123".into();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn signup_form_rules() {
        let mut form = SignupForm {
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            agreed_to_terms: true,
        };
        assert_eq!(form.validate(), Ok(()));

        form.confirm_password = "secret2".into();
        assert_eq!(form.validate(), Err(SignupError::PasswordMismatch));

        form.confirm_password = "secret1".into();
        form.agreed_to_terms = false;
        assert_eq!(form.validate(), Err(SignupError::TermsNotAccepted));

        form.first_name = "  ".into();
        assert_eq!(form.validate(), Err(SignupError::FirstNameMissing));
    }

    #[test]
    fn signup_password_rules() {
        let mut form = SignupForm {
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            password: String::new(),
            confirm_password: String::new(),
            agreed_to_terms: true,
        };
        assert_eq!(form.validate(), Err(SignupError::PasswordMissing));

        form.password = "abc".into();
        assert_eq!(form.validate(), Err(SignupError::PasswordTooShort));
    }
}
