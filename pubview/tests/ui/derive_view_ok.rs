use pubview::{PublicView, Redact};
use serde::Serialize;

#[derive(Clone, Serialize, Redact)]
#[pubview(view)]
struct User {
    id: String,
    password: String,
}

impl PublicView for User {
    type View = User;

    fn public_view(&self) -> User {
        User {
            password: String::new(),
            ..self.clone()
        }
    }
}

#[derive(Redact)]
#[pubview(view)]
struct Wrapper<T> {
    label: String,
    inner: T,
}

impl<T> PublicView for Wrapper<T> {
    type View = String;

    fn public_view(&self) -> String {
        self.label.clone()
    }
}

#[derive(Redact)]
struct Account {
    owner: User,
    wrapped: Wrapper<std::cell::Cell<u8>>,
}

fn main() {
    let account = Account {
        owner: User {
            id: "1".into(),
            password: "secret".into(),
        },
        wrapped: Wrapper {
            label: "w".into(),
            inner: std::cell::Cell::new(0),
        },
    };
    let _ = account.wrapped.inner.get();
    let _ = pubview::redact(&account);
}
