//! End-to-end tests for JSON encoding.
//!
//! These tests exercise the integration of:
//! - `Redact` derive traversal with field suppression,
//! - per-type public views reached directly and through `dyn Redact`, and
//! - decoding the encoded bytes back into plain serde destinations.

use pubview::{EncodeOptions, Encoder, JsonEncoder, PublicView, Redact};
use serde::{Deserialize, Serialize};

fn encode(value: &dyn Redact) -> Vec<u8> {
    JsonEncoder::new()
        .encode(value, &EncodeOptions::default())
        .unwrap()
}

fn encode_str(value: &dyn Redact) -> String {
    String::from_utf8(encode(value)).unwrap()
}

mod public_view {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Redact)]
    #[pubview(view)]
    struct User {
        id: String,
        name: String,
        password: String,
        avatar: String,
    }

    impl PublicView for User {
        type View = User;

        fn public_view(&self) -> User {
            User {
                password: String::new(),
                avatar: format!("//origin/{}", self.avatar),
                ..self.clone()
            }
        }
    }

    fn buster() -> User {
        User {
            id: "1".into(),
            name: "Buster".into(),
            password: "hideme".into(),
            avatar: "xxx".into(),
        }
    }

    #[test]
    fn view_replaces_structural_copy() {
        let decoded: User = serde_json::from_slice(&encode(&buster())).unwrap();
        assert_eq!(
            decoded,
            User {
                id: "1".into(),
                name: "Buster".into(),
                password: String::new(),
                avatar: "//origin/xxx".into(),
            }
        );
    }

    #[test]
    fn view_is_applied_through_trait_objects() {
        let boxed: Box<dyn Redact> = Box::new(buster());
        let decoded: User = serde_json::from_slice(&encode(&boxed)).unwrap();
        assert_eq!(decoded.avatar, "//origin/xxx");
        assert!(!encode_str(&boxed).contains("hideme"));
    }

    #[test]
    fn view_is_applied_per_element() {
        let users = vec![buster(), buster()];
        let decoded: Vec<User> = serde_json::from_slice(&encode(&users)).unwrap();
        assert_eq!(decoded.len(), 2);
        assert!(decoded.iter().all(|user| user.password.is_empty()));
    }
}

mod suppression {
    use super::*;

    #[derive(Redact)]
    struct Profile {
        field_visible: String,
        #[pubview(out = false)]
        field_hidden: String,
    }

    #[derive(Redact)]
    struct Message {
        field_visible: String,
        #[pubview(skip)]
        field_hidden: String,
    }

    #[derive(Redact)]
    struct Sample {
        id: u32,
        name: String,
        #[pubview(out = "false")]
        password: String,
        #[pubview(rename = "profile_ptr")]
        profile_box: Box<Profile>,
        #[pubview(rename = "profile_as_interface")]
        dynamic: Box<dyn Redact>,
        profile: Profile,
        messages: Vec<Message>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct ProfileOut {
        field_visible: String,
        field_hidden: String,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct SampleOut {
        id: u32,
        name: String,
        password: String,
        profile_ptr: ProfileOut,
        profile_as_interface: ProfileOut,
        profile: ProfileOut,
        messages: Vec<ProfileOut>,
    }

    const HIDDEN: &str = "should be hidden and omitted";

    fn profile(visible: &str) -> Profile {
        Profile {
            field_visible: visible.into(),
            field_hidden: HIDDEN.into(),
        }
    }

    fn message(visible: &str) -> Message {
        Message {
            field_visible: visible.into(),
            field_hidden: HIDDEN.into(),
        }
    }

    fn sample() -> Sample {
        Sample {
            id: 1,
            name: "foo".into(),
            password: HIDDEN.into(),
            profile_box: Box::new(profile("xxx")),
            dynamic: Box::new(profile("yyy")),
            profile: profile("ccc"),
            messages: vec![message("123"), message("345")],
        }
    }

    #[test]
    fn suppressed_fields_never_reach_the_output() {
        let json = encode_str(&sample());
        assert!(!json.contains(HIDDEN));
        assert!(!json.contains("password"));
        assert!(!json.contains("field_hidden"));
    }

    #[test]
    fn round_trip_reproduces_visible_fields() {
        let decoded: SampleOut = serde_json::from_slice(&encode(&sample())).unwrap();
        assert_eq!(decoded.id, 1);
        assert_eq!(decoded.name, "foo");
        assert_eq!(decoded.profile_ptr.field_visible, "xxx");
        assert_eq!(decoded.profile_as_interface.field_visible, "yyy");
        assert_eq!(decoded.profile.field_visible, "ccc");
        let visible: Vec<_> = decoded
            .messages
            .iter()
            .map(|message| message.field_visible.as_str())
            .collect();
        assert_eq!(visible, ["123", "345"]);
    }

    #[test]
    fn suppressed_fields_decode_to_defaults() {
        let decoded: SampleOut = serde_json::from_slice(&encode(&sample())).unwrap();
        assert_eq!(decoded.password, "");
        assert_eq!(decoded.profile.field_hidden, "");
        assert!(decoded.messages.iter().all(|m| m.field_hidden.is_empty()));
    }

    #[test]
    fn fields_keep_declaration_order() {
        let json = encode_str(&profile("a"));
        assert_eq!(json, r#"{"field_visible":"a"}"#);
    }
}

mod empty_values {
    use super::*;

    #[test]
    fn none_encodes_as_empty_object() {
        let value: Option<String> = None;
        assert_eq!(encode_str(&value), "{}");
    }

    #[test]
    fn none_encodes_as_null_when_requested() {
        let value: Option<String> = None;
        let options = EncodeOptions {
            emit_null_for_empty: true,
            ..EncodeOptions::default()
        };
        let bytes = JsonEncoder::new().encode(&value, &options).unwrap();
        assert_eq!(bytes, b"null");
    }

    #[test]
    fn empty_sequence_stays_a_sequence() {
        let value: Vec<u8> = Vec::new();
        assert_eq!(encode_str(&value), "[]");
    }

    #[derive(Redact)]
    struct Contact {
        email: String,
        #[pubview(omit_empty)]
        nickname: String,
        #[pubview(omit_empty)]
        tags: Vec<String>,
    }

    #[test]
    fn omit_empty_drops_empty_fields_only() {
        let bare = Contact {
            email: "a@example.com".into(),
            nickname: String::new(),
            tags: Vec::new(),
        };
        assert_eq!(encode_str(&bare), r#"{"email":"a@example.com"}"#);

        let full = Contact {
            email: "a@example.com".into(),
            nickname: "al".into(),
            tags: vec!["x".into()],
        };
        assert_eq!(
            encode_str(&full),
            r#"{"email":"a@example.com","nickname":"al","tags":["x"]}"#
        );
    }
}

mod shapes {
    use super::*;

    #[derive(Redact)]
    enum Event {
        Started,
        Renamed(String),
        Moved(i32, i32),
        Login {
            user: String,
            #[pubview(skip)]
            #[allow(dead_code)]
            password: String,
        },
    }

    #[test]
    fn enums_follow_serde_conventions() {
        assert_eq!(encode_str(&Event::Started), r#""Started""#);
        assert_eq!(
            encode_str(&Event::Renamed("x".into())),
            r#"{"Renamed":"x"}"#
        );
        assert_eq!(encode_str(&Event::Moved(1, -2)), r#"{"Moved":[1,-2]}"#);
        let login = Event::Login {
            user: "alice".into(),
            password: "secret".into(),
        };
        assert_eq!(encode_str(&login), r#"{"Login":{"user":"alice"}}"#);
    }

    #[derive(Redact)]
    struct Email(String);

    #[derive(Redact)]
    struct Point(i32, i32);

    #[derive(Redact)]
    struct Marker;

    #[test]
    fn tuple_and_unit_structs() {
        assert_eq!(encode_str(&Email("a@b.c".into())), r#""a@b.c""#);
        assert_eq!(encode_str(&Point(1, 2)), "[1,2]");
        assert_eq!(encode_str(&Marker), "{}");
    }

    #[derive(Redact)]
    struct Keywords {
        r#type: String,
    }

    #[test]
    fn raw_identifiers_are_unprefixed() {
        let value = Keywords {
            r#type: "admin".into(),
        };
        assert_eq!(encode_str(&value), r#"{"type":"admin"}"#);
    }

    #[test]
    fn pretty_printing_indents_with_tabs() {
        let bytes = JsonEncoder::new()
            .encode(&Point(1, 2), &EncodeOptions::pretty())
            .unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "[\n\t1,\n\t2\n]");
    }
}
