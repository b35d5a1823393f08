use pubview::Redact;

#[derive(Redact)]
enum Status {
    Active,
    #[pubview(rename = "gone")]
    Deleted,
    Suspended(String),
    Moved(i32, i32),
    Locked {
        reason: String,
        #[pubview(skip)]
        admin_token: String,
    },
}

#[derive(Redact)]
enum Never {}

fn main() {
    let status = Status::Locked {
        reason: "abuse".into(),
        admin_token: "t".into(),
    };
    let _ = pubview::redact(&status);
    let _ = pubview::redact(&Status::Active);
    let _ = pubview::redact(&Status::Deleted);
    let _ = pubview::redact(&Status::Suspended("x".into()));
    let _ = pubview::redact(&Status::Moved(1, 2));
    let _: Option<&Never> = None;
}
