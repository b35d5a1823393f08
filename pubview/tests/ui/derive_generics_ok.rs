use std::{collections::HashMap, marker::PhantomData, rc::Rc, sync::Arc};

use pubview::Redact;

struct Foreign;

#[derive(Redact)]
struct Page<'a, T, M> {
    items: Vec<T>,
    by_key: HashMap<String, Option<Box<T>>>,
    borrowed: &'a str,
    shared: Rc<T>,
    marker: PhantomData<M>,
}

#[derive(Redact)]
struct Dynamic {
    inner: Box<dyn Redact>,
    shared: Arc<dyn Redact + Send + Sync>,
}

#[derive(Redact)]
enum Either<L, R> {
    Left(L),
    Right(R),
}

fn main() {
    let page: Page<'_, u8, Foreign> = Page {
        items: vec![1],
        by_key: HashMap::new(),
        borrowed: "x",
        shared: Rc::new(2),
        marker: PhantomData,
    };
    let _ = pubview::redact(&page);

    let dynamic = Dynamic {
        inner: Box::new(3u8),
        shared: Arc::new("s".to_string()),
    };
    let _ = pubview::redact(&dynamic);

    let either: Either<u8, String> = Either::Left(1);
    let _ = pubview::redact(&either);
}
