use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use hyper::body::Incoming;
use hyper::server::conn::http1::Builder as ConnectionBuilder;
use hyper::{Method, Request, Response};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tower::service_fn;
use tower::util::BoxCloneService;
use tower::Service as _;
use urlpat::Pattern;

use self::body::Body;

// GET /
async fn index(_req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    Ok(Response::new(Body::from("Hello, world!")))
}

// GET /users/{id}
async fn user(req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    // the dispatcher stashed the matched pattern's template in an extension;
    // re-matching here keeps the captures borrowed from the request path
    let pattern = req.extensions().get::<Arc<Pattern>>().unwrap().clone();
    let map = pattern.find(req.uri().path()).unwrap();
    let greeting = format!("Hello, user {}!", map.get("id").unwrap());
    Ok(Response::new(Body::from(greeting.as_str())))
}

// GET /static/*
async fn assets(req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    let pattern = req.extensions().get::<Arc<Pattern>>().unwrap().clone();
    let map = pattern.find(req.uri().path()).unwrap();
    let listing = format!("would serve: {}", map.tail().unwrap_or("<index>"));
    Ok(Response::new(Body::from(listing.as_str())))
}

// 404 handler
async fn not_found(_req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    Ok(Response::builder().status(404).body(Body::empty()).unwrap())
}

// We can use `BoxCloneService` to erase the type of each handler service.
//
// We still need a `Mutex` around each service because `BoxCloneService`
// doesn't require the service to implement `Sync`.
type Service = Mutex<BoxCloneService<Request<Incoming>, Response<Body>, hyper::Error>>;

// The engine answers single-pattern match/no-match only; choosing which
// patterns to try and in what order is this dispatcher's job. First
// registered wins here.
type Router = HashMap<Method, Vec<(Arc<Pattern>, Service)>>;

async fn route(router: Arc<Router>, mut req: Request<Incoming>) -> hyper::Result<Response<Body>> {
    // find the routes for this request method
    let routes = match router.get(req.method()) {
        Some(routes) => routes,
        // if there are no routes for this method, respond with 405 Method Not Allowed
        None => return Ok(Response::builder().status(405).body(Body::empty()).unwrap()),
    };

    // probe each pattern in registration order
    let found = routes
        .iter()
        .find(|(pattern, _)| pattern.find(req.uri().path()).is_some());

    match found {
        Some((pattern, service)) => {
            req.extensions_mut().insert(pattern.clone());

            // lock the service for a very short time, just to clone it
            let mut service = service.lock().unwrap().clone();
            service.call(req).await
        }
        // no pattern matched anywhere, so this is a routing failure
        None => not_found(req).await,
    }
}

#[tokio::main]
async fn main() {
    // Compile each route template once, at registration time.
    let mut router = Router::new();

    let get = router.entry(Method::GET).or_default();
    for (template, service) in [
        ("/", BoxCloneService::new(service_fn(index))),
        ("/users/{id}", BoxCloneService::new(service_fn(user))),
        ("/static/*", BoxCloneService::new(service_fn(assets))),
    ] {
        get.push((Arc::new(Pattern::parse(template)), service.into()));
    }

    let listener = TcpListener::bind(("127.0.0.1", 3000)).await.unwrap();

    // boilerplate for the hyper service
    let router = Arc::new(router);

    loop {
        let router = router.clone();
        let (tcp, _) = listener.accept().await.unwrap();
        tokio::task::spawn(async move {
            if let Err(err) = ConnectionBuilder::new()
                .serve_connection(
                    TokioIo::new(tcp),
                    hyper::service::service_fn(|request| async {
                        route(router.clone(), request).await
                    }),
                )
                .await
            {
                println!("Error serving connection: {:?}", err);
            }
        });
    }
}

mod body {
    use std::convert::Infallible;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use hyper::body::{Body as HttpBody, Bytes, Frame};

    pub enum Body {
        Empty,
        Once(Option<Bytes>),
    }

    impl HttpBody for Body {
        type Data = Bytes;
        type Error = Infallible;

        fn poll_frame(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
        ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
            match &mut self.as_mut().get_mut() {
                Self::Empty => Poll::Ready(None),
                Self::Once(val) => Poll::Ready(val.take().map(|bytes| Ok(Frame::data(bytes)))),
            }
        }
    }

    impl Body {
        pub fn empty() -> Self {
            Self::Empty
        }
    }

    impl From<&str> for Body {
        fn from(s: &str) -> Self {
            if s.is_empty() {
                Self::Empty
            } else {
                Self::Once(Some(Bytes::from(s.as_bytes().to_vec())))
            }
        }
    }
}
