use parcel_domain::{
    Auth, AuthAttribute, AuthType, Certificate, CertificateSource, Cookie, Description, Event,
    File, FormParameter, Item, ProxyConfig, Request, RequestBody, RequestHeader, Response, Script,
    UrlEncodedParameter, Variable, Version,
};
use parcel_infrastructure::{WriteOptions, serialize_entity};
use serde::Serialize;

fn compact<T: Serialize>(value: &T) -> String {
    String::from_utf8(serialize_entity(value, &WriteOptions::compact()).unwrap()).unwrap()
}

#[test]
fn test_absent_fields_produce_empty_objects() {
    assert_eq!(compact(&Variable::default()), "{}");
    assert_eq!(compact(&Event::default()), "{}");
    assert_eq!(compact(&Script::default()), "{}");
    assert_eq!(compact(&Auth::default()), "{}");
    assert_eq!(compact(&AuthAttribute::default()), "{}");
    assert_eq!(compact(&ProxyConfig::default()), "{}");
    assert_eq!(compact(&Certificate::default()), "{}");
    assert_eq!(compact(&CertificateSource::default()), "{}");
    assert_eq!(compact(&Cookie::default()), "{}");
    assert_eq!(compact(&FormParameter::default()), "{}");
    assert_eq!(compact(&UrlEncodedParameter::default()), "{}");
    assert_eq!(compact(&File::default()), "{}");
    assert_eq!(compact(&RequestHeader::default()), "{}");
    assert_eq!(compact(&RequestBody::default()), "{}");
    assert_eq!(compact(&Request::default()), "{}");
    assert_eq!(compact(&Response::default()), "{}");
    assert_eq!(compact(&Description::default()), "{}");
    assert_eq!(compact(&Version::default()), "{}");
    assert_eq!(compact(&Item::default()), "{}");
}

#[test]
fn test_discriminator_always_emitted() {
    assert_eq!(compact(&Auth::new(AuthType::HAWK)), r#"{"type":"hawk"}"#);
}

#[test]
fn test_zero_values_are_emitted_when_present() {
    let response = Response {
        body: Some(String::new()),
        code: Some(0),
        ..Response::default()
    };
    assert_eq!(compact(&response), r#"{"body":"","code":0}"#);

    let proxy = ProxyConfig {
        port: Some(0),
        tunnel: Some(false),
        ..ProxyConfig::default()
    };
    assert_eq!(compact(&proxy), r#"{"port":0,"tunnel":false}"#);
}
