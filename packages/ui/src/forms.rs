//! # Form validation for the console's modals
//!
//! Every form keeps its raw input as strings (what the `<input>` elements
//! hold) and validates into a list of [`FieldError`]s. An empty list means the
//! form can be submitted; `to_*` methods then build the wire model.
//!
//! | Form | Model | Rules |
//! |------|-------|-------|
//! | [`validate_login`] | `Credentials` | email required and well formed, password ≥ 8 chars |
//! | [`InmateForm`] | [`Inmate`] | names 2..=50, birth date not in the future, phone format |
//! | [`BookingForm`] | [`NewBooking`] | inmate and charge chosen, booking date not in the past |
//! | [`validate_release`] | release reason | required, ≤ 500 chars |
//!
//! Date rules take `today` as an argument instead of reading the clock.

use api::{Gender, Inmate, NewBooking};
use chrono::NaiveDate;

/// A validation failure for one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// First error message for `field`, if any.
pub fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

/// Format used by `<input type="date">`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Loose shape check: `local@domain.tld`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, _)| !host.is_empty())
        && !domain.ends_with('.')
}

/// Optional leading `+`, then digits, spaces and dashes only.
pub fn is_valid_phone(phone: &str) -> bool {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
}

fn check_length(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
    label: &str,
) {
    let len = value.trim().chars().count();
    if len < min {
        errors.push(FieldError::new(field, &format!("{label} is too short")));
    } else if len > max {
        errors.push(FieldError::new(field, &format!("{label} is too long")));
    }
}

fn check_required(errors: &mut Vec<FieldError>, field: &'static str, value: &str, message: &str) -> bool {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
        return false;
    }
    true
}

pub fn validate_login(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if check_required(&mut errors, "email", email, "Email is required") && !is_valid_email(email) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }
    if check_required(&mut errors, "password", password, "Password is required")
        && password.chars().count() < 8
    {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 8 characters",
        ));
    }
    errors
}

pub fn validate_release(reason: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if check_required(&mut errors, "release_reason", reason, "Release reason is required") {
        check_length(&mut errors, "release_reason", reason, 0, 500, "Release reason");
    }
    errors
}

/// Raw state of the add/edit inmate modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InmateForm {
    pub id: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub citizenship_number: String,
    /// Numeric gender code, empty until chosen.
    pub gender: String,
    pub address: String,
    pub phone_number: String,
    pub emergency_contact: String,
    pub emergency_contact_phone: String,
}

impl InmateForm {
    pub fn from_inmate(inmate: &Inmate) -> Self {
        Self {
            id: inmate.id.clone(),
            first_name: inmate.first_name.clone(),
            middle_name: inmate.middle_name.clone(),
            last_name: inmate.last_name.clone(),
            date_of_birth: format_date(inmate.date_of_birth),
            citizenship_number: inmate.citizenship_number.clone(),
            gender: inmate.gender.code().to_string(),
            address: inmate.address.clone(),
            phone_number: inmate.phone_number.clone(),
            emergency_contact: inmate.emergency_contact.clone(),
            emergency_contact_phone: inmate.emergency_contact_phone.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        !self.id.is_empty()
    }

    fn parsed_gender(&self) -> Option<Gender> {
        self.gender.trim().parse::<u8>().ok().and_then(Gender::from_code)
    }

    pub fn validate(&self, today: NaiveDate) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if check_required(&mut errors, "first_name", &self.first_name, "First name is required") {
            check_length(&mut errors, "first_name", &self.first_name, 2, 50, "First name");
        }
        check_length(&mut errors, "middle_name", &self.middle_name, 0, 50, "Middle name");
        if check_required(&mut errors, "last_name", &self.last_name, "Last name is required") {
            check_length(&mut errors, "last_name", &self.last_name, 2, 50, "Last name");
        }

        if check_required(
            &mut errors,
            "date_of_birth",
            &self.date_of_birth,
            "Date of birth is required",
        ) {
            match parse_date(&self.date_of_birth) {
                None => errors.push(FieldError::new("date_of_birth", "Please enter a valid date")),
                Some(date) if date > today => {
                    errors.push(FieldError::new("date_of_birth", "Date cannot be in the future"))
                }
                Some(_) => {}
            }
        }

        check_required(
            &mut errors,
            "citizenship_number",
            &self.citizenship_number,
            "Citizenship number is required",
        );
        if self.parsed_gender().is_none() {
            errors.push(FieldError::new("gender", "Gender is required"));
        }
        check_length(&mut errors, "address", &self.address, 0, 200, "Address");

        for (field, value) in [
            ("phone_number", &self.phone_number),
            ("emergency_contact_phone", &self.emergency_contact_phone),
        ] {
            if !value.trim().is_empty() && !is_valid_phone(value.trim()) {
                errors.push(FieldError::new(field, "Invalid phone number format"));
            }
        }
        check_length(
            &mut errors,
            "emergency_contact",
            &self.emergency_contact,
            0,
            50,
            "Emergency contact name",
        );

        errors
    }

    /// Validate and build the wire model.
    pub fn to_inmate(&self, today: NaiveDate) -> Result<Inmate, Vec<FieldError>> {
        let errors = self.validate(today);
        let (Some(date_of_birth), Some(gender), true) = (
            parse_date(&self.date_of_birth),
            self.parsed_gender(),
            errors.is_empty(),
        ) else {
            return Err(errors);
        };

        Ok(Inmate {
            id: self.id.clone(),
            first_name: self.first_name.trim().to_string(),
            middle_name: self.middle_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            date_of_birth,
            citizenship_number: self.citizenship_number.trim().to_string(),
            gender,
            address: self.address.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            emergency_contact: self.emergency_contact.trim().to_string(),
            emergency_contact_phone: self.emergency_contact_phone.trim().to_string(),
        })
    }
}

/// Raw state of the add booking modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    pub inmate_id: String,
    pub charge_id: String,
    pub booking_date: String,
    pub booking_location: String,
    pub facility_name: String,
}

impl BookingForm {
    /// Empty form with the booking date preset to `today`.
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            booking_date: format_date(today),
            ..Self::default()
        }
    }

    pub fn validate(&self, today: NaiveDate) -> Vec<FieldError> {
        let mut errors = Vec::new();

        check_required(&mut errors, "inmate_id", &self.inmate_id, "Please select an inmate");
        check_required(&mut errors, "charge_id", &self.charge_id, "Please select a charge");

        if check_required(
            &mut errors,
            "booking_date",
            &self.booking_date,
            "Booking date is required",
        ) {
            match parse_date(&self.booking_date) {
                None => errors.push(FieldError::new("booking_date", "Please enter a valid date")),
                Some(date) if date < today => errors.push(FieldError::new(
                    "booking_date",
                    "Booking date must be in the future",
                )),
                Some(_) => {}
            }
        }

        if check_required(
            &mut errors,
            "booking_location",
            &self.booking_location,
            "Booking location is required",
        ) {
            check_length(&mut errors, "booking_location", &self.booking_location, 0, 200, "Booking location");
        }
        if check_required(
            &mut errors,
            "facility_name",
            &self.facility_name,
            "Facility name is required",
        ) {
            check_length(&mut errors, "facility_name", &self.facility_name, 0, 200, "Facility name");
        }

        errors
    }

    pub fn to_booking(&self, today: NaiveDate) -> Result<NewBooking, Vec<FieldError>> {
        let errors = self.validate(today);
        let (Some(booking_date), true) = (parse_date(&self.booking_date), errors.is_empty()) else {
            return Err(errors);
        };

        Ok(NewBooking {
            inmate_id: self.inmate_id.trim().to_string(),
            charge_id: self.charge_id.trim().to_string(),
            booking_date,
            booking_location: self.booking_location.trim().to_string(),
            facility_name: self.facility_name.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn fields(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|e| e.field).collect()
    }

    fn valid_inmate() -> InmateForm {
        InmateForm {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            date_of_birth: "1990-04-01".to_string(),
            citizenship_number: "C-123".to_string(),
            gender: "0".to_string(),
            phone_number: "+1 555-0100".to_string(),
            ..InmateForm::default()
        }
    }

    #[test]
    fn test_login_rules() {
        assert!(validate_login("a@b.com", "hunter22").is_empty());

        let errors = validate_login("", "");
        assert_eq!(fields(&errors), vec!["email", "password"]);
        assert_eq!(error_for(&errors, "email"), Some("Email is required"));

        let errors = validate_login("not-an-email", "short");
        assert_eq!(error_for(&errors, "email"), Some("Invalid email address"));
        assert_eq!(
            error_for(&errors, "password"),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("officer@jail.example.org"));
        assert!(!is_valid_email("officer@jail"));
        assert!(!is_valid_email("@jail.org"));
        assert!(!is_valid_email("a b@jail.org"));
        assert!(!is_valid_email("a@b@jail.org"));
        assert!(!is_valid_email("a@jail."));
    }

    #[test]
    fn test_phone_shapes() {
        assert!(is_valid_phone("+1 555-0100"));
        assert!(is_valid_phone("5550100"));
        assert!(!is_valid_phone("+"));
        assert!(!is_valid_phone("555-CALL"));
        assert!(!is_valid_phone("1+555"));
    }

    #[test]
    fn test_valid_inmate_builds_model() {
        let inmate = valid_inmate().to_inmate(today()).unwrap();
        assert!(inmate.is_new());
        assert_eq!(inmate.gender, Gender::Male);
        assert_eq!(inmate.date_of_birth, NaiveDate::from_ymd_opt(1990, 4, 1).unwrap());
    }

    #[test]
    fn test_inmate_name_lengths() {
        let mut form = valid_inmate();
        form.first_name = "J".to_string();
        form.last_name = "D".repeat(51);
        form.middle_name = "M".repeat(51);
        let errors = form.validate(today());
        assert_eq!(error_for(&errors, "first_name"), Some("First name is too short"));
        assert_eq!(error_for(&errors, "last_name"), Some("Last name is too long"));
        assert_eq!(error_for(&errors, "middle_name"), Some("Middle name is too long"));
    }

    #[test]
    fn test_inmate_birth_date_rules() {
        let mut form = valid_inmate();
        form.date_of_birth = "2024-06-16".to_string();
        assert_eq!(
            error_for(&form.validate(today()), "date_of_birth"),
            Some("Date cannot be in the future")
        );

        form.date_of_birth = "16/06/2024".to_string();
        assert_eq!(
            error_for(&form.validate(today()), "date_of_birth"),
            Some("Please enter a valid date")
        );

        form.date_of_birth = "2024-06-15".to_string();
        assert!(form.validate(today()).is_empty());
    }

    #[test]
    fn test_inmate_missing_required() {
        let errors = InmateForm::default().validate(today());
        assert_eq!(
            fields(&errors),
            vec!["first_name", "last_name", "date_of_birth", "citizenship_number", "gender"]
        );
        assert!(InmateForm::default().to_inmate(today()).is_err());
    }

    #[test]
    fn test_inmate_phone_checked_only_when_present() {
        let mut form = valid_inmate();
        form.phone_number = String::new();
        form.emergency_contact_phone = "call me".to_string();
        assert_eq!(
            fields(&form.validate(today())),
            vec!["emergency_contact_phone"]
        );
    }

    #[test]
    fn test_inmate_form_roundtrip_keeps_id() {
        let mut inmate = valid_inmate().to_inmate(today()).unwrap();
        inmate.id = "42".to_string();
        let form = InmateForm::from_inmate(&inmate);
        assert!(form.is_edit());
        assert_eq!(form.date_of_birth, "1990-04-01");
        assert_eq!(form.to_inmate(today()).unwrap(), inmate);
    }

    #[test]
    fn test_booking_rules() {
        let mut form = BookingForm::starting(today());
        let errors = form.validate(today());
        assert_eq!(
            fields(&errors),
            vec!["inmate_id", "charge_id", "booking_location", "facility_name"]
        );

        form.inmate_id = "42".to_string();
        form.charge_id = "7".to_string();
        form.booking_location = "Intake".to_string();
        form.facility_name = "North Facility".to_string();
        let booking = form.to_booking(today()).unwrap();
        assert_eq!(booking.booking_date, today());

        form.booking_date = "2024-06-14".to_string();
        assert_eq!(
            error_for(&form.validate(today()), "booking_date"),
            Some("Booking date must be in the future")
        );

        form.booking_date = "2024-06-15".to_string();
        form.facility_name = "F".repeat(201);
        assert_eq!(
            error_for(&form.validate(today()), "facility_name"),
            Some("Facility name is too long")
        );
    }

    #[test]
    fn test_release_rules() {
        assert!(validate_release("Bail posted").is_empty());
        assert_eq!(
            error_for(&validate_release("   "), "release_reason"),
            Some("Release reason is required")
        );
        assert_eq!(
            error_for(&validate_release(&"x".repeat(501)), "release_reason"),
            Some("Release reason is too long")
        );
    }
}
