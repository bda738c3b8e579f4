use super::*;

#[test]
fn default_registration_uses_indian_country_codes() {
    let reg = Registration::default();
    assert_eq!(reg.phone_code, "+91");
    assert_eq!(reg.whatsapp_code, "+91");
    assert!(reg.name.is_empty());
    assert!(reg.whatsapp_number.is_empty());
}

#[test]
fn field_names_round_trip_through_from_name() {
    for field in Field::ALL {
        assert_eq!(Field::from_name(field.name()), Some(field));
    }
}

#[test]
fn unknown_control_name_is_rejected() {
    assert_eq!(Field::from_name("password"), None);
    assert_eq!(Field::from_name("phone_number"), None);
    assert_eq!(Field::from_name(""), None);
}

#[test]
fn set_touches_only_the_named_field() {
    let mut reg = Registration::default();
    reg.set(Field::District, "Malappuram");
    let mut expected = Registration::default();
    expected.district = "Malappuram".to_owned();
    assert_eq!(reg, expected);
    assert_eq!(reg.get(Field::District), "Malappuram");
}

#[test]
fn mirror_copies_both_phone_fields() {
    let mut reg = Registration::default();
    reg.set(Field::PhoneCode, "+971");
    reg.set(Field::PhoneNumber, "501234567");
    reg.mirror_phone_to_whatsapp();
    assert_eq!(reg.whatsapp_code, "+971");
    assert_eq!(reg.whatsapp_number, "501234567");
}

#[test]
fn reset_whatsapp_restores_default_code() {
    let mut reg = Registration::default();
    reg.set(Field::WhatsappCode, "+44");
    reg.set(Field::WhatsappNumber, "7700900123");
    reg.reset_whatsapp();
    assert_eq!(reg.whatsapp_code, "+91");
    assert_eq!(reg.whatsapp_number, "");
}

#[test]
fn phone_and_whatsapp_classification() {
    assert!(Field::PhoneCode.is_phone());
    assert!(Field::PhoneNumber.is_phone());
    assert!(!Field::WhatsappNumber.is_phone());
    assert!(Field::WhatsappCode.is_whatsapp());
    assert!(!Field::Email.is_whatsapp());
}

#[test]
fn registration_serializes_with_camel_case_keys() {
    let mut reg = Registration::default();
    reg.set(Field::PhoneNumber, "9876543210");
    let json = serde_json::to_value(&reg).unwrap();
    assert_eq!(json["phoneNumber"], "9876543210");
    assert_eq!(json["whatsappCode"], "+91");
    assert!(json.get("phone_number").is_none());
}
