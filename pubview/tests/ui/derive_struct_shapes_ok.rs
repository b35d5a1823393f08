use pubview::Redact;

#[derive(Redact)]
struct Named {
    id: u64,
    #[pubview(rename = "displayName", omit_empty)]
    display_name: String,
    #[pubview(out = false)]
    password: String,
}

#[derive(Redact)]
struct Newtype(String);

#[derive(Redact)]
struct Tuple(u8, #[pubview(skip)] String, i64);

#[derive(Redact)]
struct Unit;

fn main() {
    let named = Named {
        id: 1,
        display_name: String::new(),
        password: "secret".into(),
    };
    let _ = pubview::redact(&named);
    let _ = pubview::redact(&Newtype("x".into()));
    let _ = pubview::redact(&Tuple(1, "hidden".into(), 2));
    let _ = pubview::redact(&Unit);
}
