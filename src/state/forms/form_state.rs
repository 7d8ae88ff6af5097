//! Form state management and form structs

use super::field::{FieldId, FormField};

/// Trait for common form operations
///
/// Forms expose their fields by focus index; the index one past the last field
/// is the submit row.
pub trait Form {
    fn fields(&self) -> Vec<&FormField>;
    fn fields_mut(&mut self) -> Vec<&mut FormField>;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);

    /// Fields plus the submit row
    fn field_count(&self) -> usize {
        self.fields().len() + 1
    }

    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }

    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }

    fn is_submit_row_active(&self) -> bool {
        self.active_field() == self.field_count() - 1
    }

    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields().into_iter().nth(index)
    }

    fn field(&self, id: FieldId) -> Option<&FormField> {
        self.fields().into_iter().find(|f| f.id == id)
    }

    fn field_mut(&mut self, id: FieldId) -> Option<&mut FormField> {
        self.fields_mut().into_iter().find(|f| f.id == id)
    }

    /// Replace a field's text. No validation happens here.
    fn set_field(&mut self, id: FieldId, value: &str) {
        if let Some(field) = self.field_mut(id) {
            field.set_text(value.to_string());
        }
    }

    fn set_flag(&mut self, id: FieldId, value: bool) {
        if let Some(field) = self.field_mut(id) {
            field.set_flag(value);
        }
    }

    fn toggle_secret_visibility(&mut self, id: FieldId) {
        if let Some(field) = self.field_mut(id) {
            field.toggle_reveal();
        }
    }

    /// Text of a field, empty when the form doesn't own it
    fn text(&self, id: FieldId) -> &str {
        self.field(id).map_or("", FormField::as_text)
    }
}

/// Enum representing the form of the mounted workflow
#[derive(Debug, Clone)]
pub enum FormState {
    SignIn(SignInForm),
    Registration(RegistrationForm),
}

impl FormState {
    pub fn as_form(&self) -> &dyn Form {
        match self {
            FormState::SignIn(f) => f,
            FormState::Registration(f) => f,
        }
    }

    pub fn as_form_mut(&mut self) -> &mut dyn Form {
        match self {
            FormState::SignIn(f) => f,
            FormState::Registration(f) => f,
        }
    }

    pub fn next_field(&mut self) {
        self.as_form_mut().next_field();
    }

    pub fn prev_field(&mut self) {
        self.as_form_mut().prev_field();
    }
}

// Sign-in Form
#[derive(Debug, Clone)]
pub struct SignInForm {
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
}

impl SignInForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text(FieldId::Email, "Email Address"),
            password: FormField::secret(FieldId::Password, "Password"),
            active_field_index: 0,
        }
    }
}

impl Default for SignInForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignInForm {
    fn fields(&self) -> Vec<&FormField> {
        vec![&self.email, &self.password]
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![&mut self.email, &mut self.password]
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
}

// Registration Form
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub terms: FormField,
    pub active_field_index: usize,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            first_name: FormField::text(FieldId::FirstName, "First Name"),
            last_name: FormField::text(FieldId::LastName, "Last Name"),
            email: FormField::text(FieldId::Email, "Email Address"),
            phone: FormField::text(FieldId::Phone, "Phone Number"),
            password: FormField::secret(FieldId::Password, "Password"),
            confirm_password: FormField::secret(FieldId::ConfirmPassword, "Confirm Password"),
            terms: FormField::flag(FieldId::Terms, "I agree to the Terms and Conditions"),
            active_field_index: 0,
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn fields(&self) -> Vec<&FormField> {
        vec![
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.password,
            &self.confirm_password,
            &self.terms,
        ]
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![
            &mut self.first_name,
            &mut self.last_name,
            &mut self.email,
            &mut self.phone,
            &mut self.password,
            &mut self.confirm_password,
            &mut self.terms,
        ]
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(7);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod form_state_enum {
        use super::*;

        #[test]
        fn test_next_field_cycles_through_form() {
            let mut state = FormState::SignIn(SignInForm::new());
            assert_eq!(state.as_form().active_field(), 0);
            state.next_field();
            assert_eq!(state.as_form().active_field(), 1);
        }

        #[test]
        fn test_active_field_starts_at_first() {
            let state = FormState::Registration(RegistrationForm::new());
            let form = state.as_form();
            let field = form.get_field(form.active_field());
            assert_eq!(field.map(|f| f.id), Some(FieldId::FirstName));
        }

        #[test]
        fn test_submit_row_has_no_field() {
            let mut state = FormState::SignIn(SignInForm::new());
            state.prev_field();
            assert!(state.as_form().is_submit_row_active());
            let form = state.as_form();
            assert!(form.get_field(form.active_field()).is_none());
        }
    }

    mod sign_in_form {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = SignInForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.email.id, FieldId::Email);
            assert!(form.password.is_secret());
            assert_eq!(form.text(FieldId::Email), "");
        }

        #[test]
        fn test_field_count_includes_submit_row() {
            assert_eq!(SignInForm::new().field_count(), 3);
        }

        #[test]
        fn test_next_field_wraps() {
            let mut form = SignInForm::new();
            for _ in 0..3 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_set_field_replaces_value() {
            let mut form = SignInForm::new();
            form.set_field(FieldId::Email, "a@b.c");
            form.set_field(FieldId::Email, "x@y.z");
            assert_eq!(form.text(FieldId::Email), "x@y.z");
        }

        #[test]
        fn test_set_field_outside_domain_is_noop() {
            let mut form = SignInForm::new();
            form.set_field(FieldId::Phone, "5551234567");
            assert_eq!(form.text(FieldId::Phone), "");
            assert!(form.field(FieldId::Phone).is_none());
        }

        #[test]
        fn test_toggle_secret_visibility_keeps_value() {
            let mut form = SignInForm::new();
            form.set_field(FieldId::Password, "hunter22");
            form.toggle_secret_visibility(FieldId::Password);
            assert!(form.password.is_revealed());
            assert_eq!(form.text(FieldId::Password), "hunter22");
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = SignInForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 2);
        }
    }

    mod registration_form {
        use super::*;

        #[test]
        fn test_field_order() {
            let form = RegistrationForm::new();
            let ids: Vec<FieldId> = form.fields().iter().map(|f| f.id).collect();
            assert_eq!(
                ids,
                vec![
                    FieldId::FirstName,
                    FieldId::LastName,
                    FieldId::Email,
                    FieldId::Phone,
                    FieldId::Password,
                    FieldId::ConfirmPassword,
                    FieldId::Terms,
                ]
            );
            assert_eq!(form.field_count(), 8);
        }

        #[test]
        fn test_prev_field_wraps_to_submit_row() {
            let mut form = RegistrationForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, 7);
            assert!(form.is_submit_row_active());
        }

        #[test]
        fn test_set_flag_only_touches_terms() {
            let mut form = RegistrationForm::new();
            form.set_flag(FieldId::Terms, true);
            form.set_flag(FieldId::Email, true);
            assert!(form.terms.as_flag());
            assert_eq!(form.text(FieldId::Email), "");
        }

        #[test]
        fn test_each_secret_toggles_independently() {
            let mut form = RegistrationForm::new();
            form.toggle_secret_visibility(FieldId::ConfirmPassword);
            assert!(form.confirm_password.is_revealed());
            assert!(!form.password.is_revealed());
        }

        #[test]
        fn test_get_field_by_index() {
            let form = RegistrationForm::new();
            assert_eq!(form.get_field(3).map(|f| f.id), Some(FieldId::Phone));
            assert!(form.get_field(7).is_none());
        }
    }
}
