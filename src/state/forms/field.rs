//! Form field value objects

/// Names of every field either workflow can own
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Terms,
}

impl FieldId {
    /// Stable field name, matching the service's vocabulary where one exists
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
            Self::Terms => "terms",
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Masked text; `revealed` is display-only
    Secret { value: String, revealed: bool },
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its label and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new plain text field
    pub fn text(id: FieldId, label: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new masked field
    pub fn secret(id: FieldId, label: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            value: FieldValue::Secret {
                value: String::new(),
                revealed: false,
            },
        }
    }

    /// Create a new checkbox field
    pub fn flag(id: FieldId, label: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            value: FieldValue::Flag(false),
        }
    }

    /// Get the text value (returns empty string for flag fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Secret { value: s, .. } => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Get the flag value (returns false for text fields)
    pub fn as_flag(&self) -> bool {
        match &self.value {
            FieldValue::Flag(b) => *b,
            _ => false,
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self.value, FieldValue::Secret { .. })
    }

    pub fn is_flag(&self) -> bool {
        matches!(self.value, FieldValue::Flag(_))
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.value, FieldValue::Secret { revealed: true, .. })
    }

    /// Replace the text value, keeping the reveal state of secret fields
    pub fn set_text(&mut self, text: String) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret { value: s, .. } => *s = text,
            FieldValue::Flag(_) => {}
        }
    }

    pub fn set_flag(&mut self, flag: bool) {
        if let FieldValue::Flag(b) = &mut self.value {
            *b = flag;
        }
    }

    /// Flip between masked and clear-text rendering
    pub fn toggle_reveal(&mut self) {
        if let FieldValue::Secret { revealed, .. } = &mut self.value {
            *revealed = !*revealed;
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Secret {
                value,
                revealed: true,
            } => value.clone(),
            FieldValue::Secret { value, .. } => "•".repeat(value.chars().count()),
            FieldValue::Flag(true) => "[x]".to_string(),
            FieldValue::Flag(false) => "[ ]".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_masked_until_revealed() {
        let mut field = FormField::secret(FieldId::Password, "Password");
        field.set_text("hunter22".to_string());
        assert_eq!(field.display_value(), "••••••••");

        field.toggle_reveal();
        assert!(field.is_revealed());
        assert_eq!(field.display_value(), "hunter22");
        assert_eq!(field.as_text(), "hunter22");
    }

    #[test]
    fn test_reveal_does_not_touch_value() {
        let mut field = FormField::secret(FieldId::Password, "Password");
        field.set_text("secret".to_string());
        field.toggle_reveal();
        field.toggle_reveal();
        assert!(!field.is_revealed());
        assert_eq!(field.as_text(), "secret");
    }

    #[test]
    fn test_set_text_keeps_reveal_state() {
        let mut field = FormField::secret(FieldId::Password, "Password");
        field.toggle_reveal();
        field.set_text("abc".to_string());
        assert!(field.is_revealed());
    }

    #[test]
    fn test_flag_ignores_text_input() {
        let mut field = FormField::flag(FieldId::Terms, "Terms");
        field.set_text("yes".to_string());
        assert!(!field.as_flag());
        assert_eq!(field.as_text(), "");

        field.set_flag(true);
        assert!(field.as_flag());
        assert_eq!(field.display_value(), "[x]");
    }

    #[test]
    fn test_field_names() {
        assert_eq!(FieldId::FirstName.name(), "first_name");
        assert_eq!(FieldId::ConfirmPassword.name(), "confirm_password");
        assert_eq!(FieldId::Terms.name(), "terms");
    }
}
