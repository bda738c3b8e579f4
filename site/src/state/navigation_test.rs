use super::*;

#[test]
fn default_page_is_landing() {
    assert_eq!(Page::default(), Page::Landing);
}

#[test]
fn fragments_parse_back_to_their_page() {
    for page in [Page::Landing, Page::Form, Page::PaymentOptions] {
        assert_eq!(Page::from_fragment(page.fragment()), page);
        assert_eq!(Page::from_fragment(&format!("#{}", page.fragment())), page);
    }
}

#[test]
fn unknown_or_empty_fragment_falls_back_to_landing() {
    assert_eq!(Page::from_fragment(""), Page::Landing);
    assert_eq!(Page::from_fragment("#"), Page::Landing);
    assert_eq!(Page::from_fragment("#payment"), Page::Landing);
    assert_eq!(Page::from_fragment("#Form"), Page::Landing);
}

#[test]
fn fragment_values_are_the_page_names() {
    assert_eq!(Page::Landing.fragment(), "landingPage");
    assert_eq!(Page::Form.fragment(), "form");
    assert_eq!(Page::PaymentOptions.fragment(), "paymentOptions");
}
