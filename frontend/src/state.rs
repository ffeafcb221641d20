use std::fmt;

/// Text inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
    Data,
    /// Shared by the "retrieve", "update" and "delete" inputs.
    DataId,
    NewData,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::Data => "data",
            Field::DataId => "data id",
            Field::NewData => "new data",
        };
        f.write_str(name)
    }
}

/// Everything the view shows. Nothing here is persisted or reconciled with
/// the chain; flags only change once the matching remote call resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub email: String,
    pub password: String,
    pub data: String,
    pub data_id: String,
    pub new_data: String,

    pub is_registered: bool,
    pub is_deactivated: bool,

    pub message: String,
    pub retrieved_data: String,
}

impl ViewState {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Data => &self.data,
            Field::DataId => &self.data_id,
            Field::NewData => &self.new_data,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Data => &mut self.data,
            Field::DataId => &mut self.data_id,
            Field::NewData => &mut self.new_data,
        };
        *slot = value.into();
    }

    /// First of `fields` that is still empty, if any.
    pub fn first_missing(&self, fields: &[Field]) -> Option<Field> {
        fields.iter().copied().find(|f| self.field(*f).is_empty())
    }
}
