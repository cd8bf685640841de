use parcel_domain::{
    AuthAttribute, Certificate, CertificateSource, Cookie, Description, Event, File,
    FormParameter, ProxyConfig, RequestHeader, Script, UrlEncodedParameter, Version,
};
use parcel_infrastructure::{WriteOptions, parse_entity, serialize_entity};
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde::de::DeserializeOwned;

fn rewrite<T: Serialize + DeserializeOwned>(json: &str) -> String {
    let value: T = parse_entity(json.as_bytes()).expect("entity parses");
    String::from_utf8(serialize_entity(&value, &WriteOptions::compact()).expect("serialize"))
        .expect("utf-8")
}

#[test]
fn test_leaf_entities_keep_unknown_keys() {
    let cases: [(&str, fn(&str) -> String, &str); 13] = [
        (
            "cookie",
            rewrite::<Cookie>,
            r#"{"domain":"api.local","hostOnly":true,"name":"sid","value":"1","sameSite":"Lax"}"#,
        ),
        (
            "form parameter",
            rewrite::<FormParameter>,
            r#"{"key":"avatar","src":["a.png"],"type":"file","x-upload":{"chunked":true}}"#,
        ),
        (
            "urlencoded parameter",
            rewrite::<UrlEncodedParameter>,
            r#"{"key":"q","value":"1","x-order":3}"#,
        ),
        (
            "proxy",
            rewrite::<ProxyConfig>,
            r#"{"match":"http+https://*/*","host":"proxy.local","port":3128,"authenticate":false}"#,
        ),
        (
            "certificate",
            rewrite::<Certificate>,
            r#"{"name":"client","matches":["https://api.local/*"],"key":{"src":"/k.pem","x-store":"disk"},"pfx":{"src":"/c.pfx"}}"#,
        ),
        (
            "certificate source",
            rewrite::<CertificateSource>,
            r#"{"src":"/c.pem","checksum":"abc"}"#,
        ),
        (
            "file",
            rewrite::<File>,
            r#"{"src":"/tmp/upload.bin","mime":"application/octet-stream"}"#,
        ),
        (
            "script",
            rewrite::<Script>,
            r#"{"type":"text/javascript","exec":["pm.test()"],"packages":{}}"#,
        ),
        (
            "event",
            rewrite::<Event>,
            r#"{"listen":"test","script":{"exec":["1"],"x-lint":false},"x-order":1}"#,
        ),
        (
            "auth attribute",
            rewrite::<AuthAttribute>,
            r#"{"key":"token","value":"t","type":"string","x-secret":true}"#,
        ),
        (
            "header",
            rewrite::<RequestHeader>,
            r#"{"key":"Accept","value":"*/*","x-generated":true}"#,
        ),
        (
            "description",
            rewrite::<Description>,
            r#"{"content":"docs","type":"text/markdown","x-lang":"en"}"#,
        ),
        (
            "version",
            rewrite::<Version>,
            r#"{"major":1,"minor":2,"patch":3,"x-build":"7"}"#,
        ),
    ];

    for (entity, rewrite, json) in cases {
        assert_eq!(rewrite(json), json, "{entity} lost or reordered keys");
    }
}
