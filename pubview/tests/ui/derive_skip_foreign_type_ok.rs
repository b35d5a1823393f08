use pubview::Redact;

struct DatabaseHandle;

#[derive(Redact)]
struct Service {
    name: String,
    #[pubview(skip)]
    handle: DatabaseHandle,
}

fn main() {
    let service = Service {
        name: "api".into(),
        handle: DatabaseHandle,
    };
    let _ = &service.handle;
    let _ = pubview::redact(&service);
}
