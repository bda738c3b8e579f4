//! Enrollment form fields.
//!
//! Every form control carries a `name` attribute that maps onto exactly one
//! [`Field`]; the form uses a single "set field by name" handler, so the
//! closed enum is what keeps unknown control names from writing anywhere.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_COUNTRY_CODE;

/// User-entered enrollment data, serialized with the keys the collection
/// endpoint expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub age: String,
    pub phone_code: String,
    pub phone_number: String,
    pub whatsapp_code: String,
    pub whatsapp_number: String,
    pub email: String,
    pub place: String,
    pub district: String,
    pub notes: String,
}

impl Default for Registration {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            phone_code: DEFAULT_COUNTRY_CODE.to_owned(),
            phone_number: String::new(),
            whatsapp_code: DEFAULT_COUNTRY_CODE.to_owned(),
            whatsapp_number: String::new(),
            email: String::new(),
            place: String::new(),
            district: String::new(),
            notes: String::new(),
        }
    }
}

/// One form control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Age,
    PhoneCode,
    PhoneNumber,
    WhatsappCode,
    WhatsappNumber,
    Email,
    Place,
    District,
    Notes,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Name,
        Field::Age,
        Field::PhoneCode,
        Field::PhoneNumber,
        Field::WhatsappCode,
        Field::WhatsappNumber,
        Field::Email,
        Field::Place,
        Field::District,
        Field::Notes,
    ];

    /// The control's `name` attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::PhoneCode => "phoneCode",
            Field::PhoneNumber => "phoneNumber",
            Field::WhatsappCode => "whatsappCode",
            Field::WhatsappNumber => "whatsappNumber",
            Field::Email => "email",
            Field::Place => "place",
            Field::District => "district",
            Field::Notes => "notes",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Fields whose changes drive the WhatsApp mirror.
    #[must_use]
    pub fn is_phone(self) -> bool {
        matches!(self, Field::PhoneCode | Field::PhoneNumber)
    }

    #[must_use]
    pub fn is_whatsapp(self) -> bool {
        matches!(self, Field::WhatsappCode | Field::WhatsappNumber)
    }
}

impl Registration {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::PhoneCode => &self.phone_code,
            Field::PhoneNumber => &self.phone_number,
            Field::WhatsappCode => &self.whatsapp_code,
            Field::WhatsappNumber => &self.whatsapp_number,
            Field::Email => &self.email,
            Field::Place => &self.place,
            Field::District => &self.district,
            Field::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Age => &mut self.age,
            Field::PhoneCode => &mut self.phone_code,
            Field::PhoneNumber => &mut self.phone_number,
            Field::WhatsappCode => &mut self.whatsapp_code,
            Field::WhatsappNumber => &mut self.whatsapp_number,
            Field::Email => &mut self.email,
            Field::Place => &mut self.place,
            Field::District => &mut self.district,
            Field::Notes => &mut self.notes,
        };
        *slot = value.into();
    }

    /// Copy the phone pair into the WhatsApp pair.
    pub fn mirror_phone_to_whatsapp(&mut self) {
        self.whatsapp_code.clone_from(&self.phone_code);
        self.whatsapp_number.clone_from(&self.phone_number);
    }

    /// Reset the WhatsApp pair to the default code and an empty number.
    pub fn reset_whatsapp(&mut self) {
        DEFAULT_COUNTRY_CODE.clone_into(&mut self.whatsapp_code);
        self.whatsapp_number.clear();
    }
}
