use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urlpat::Pattern;

macro_rules! routes {
    (literal) => {{
        routes!(finish => "p1", "p2", "p3")
    }};
    (brackets) => {{
        routes!(finish => "{p1}", "{p2}", "{p3}")
    }};
    (finish => $p1:literal, $p2:literal, $p3:literal) => {{
        [
            concat!("/authorizations"),
            concat!("/authorizations/", $p1),
            concat!("/applications/", $p1, "/tokens/", $p2),
            concat!("/events"),
            concat!("/repos/", $p1, "/", $p2, "/events"),
            concat!("/networks/", $p1, "/", $p2, "/events"),
            concat!("/orgs/", $p1, "/events"),
            concat!("/users/", $p1, "/received_events"),
            concat!("/users/", $p1, "/received_events/public"),
            concat!("/users/", $p1, "/events"),
            concat!("/users/", $p1, "/events/public"),
            concat!("/users/", $p1, "/events/orgs/", $p2),
            concat!("/feeds"),
            concat!("/notifications"),
            concat!("/repos/", $p1, "/", $p2, "/notifications"),
            concat!("/notifications/threads/", $p1),
            concat!("/notifications/threads/", $p1, "/subscription"),
            concat!("/repos/", $p1, "/", $p2, "/stargazers"),
            concat!("/users/", $p1, "/starred"),
            concat!("/user/starred"),
            concat!("/user/starred/", $p1, "/", $p2),
            concat!("/repos/", $p1, "/", $p2, "/git/blobs/", $p3),
            concat!("/repos/", $p1, "/", $p2, "/git/commits/", $p3),
            concat!("/repos/", $p1, "/", $p2, "/git/refs"),
            concat!("/repos/", $p1, "/", $p2, "/git/tags/", $p3),
            concat!("/gists/", $p1, "/star"),
        ]
    }};
}

fn compile_and_match(c: &mut Criterion) {
    let templates = routes!(brackets);
    let paths = routes!(literal).to_vec();

    c.bench_function("parse", |b| {
        b.iter(|| {
            for template in black_box(&templates) {
                black_box(Pattern::parse(template));
            }
        });
    });

    let patterns: Vec<Pattern> = templates.iter().map(|t| Pattern::parse(t)).collect();

    // every path matches its own pattern
    c.bench_function("find", |b| {
        b.iter(|| {
            for (pattern, path) in patterns.iter().zip(black_box(&paths)) {
                let map = black_box(pattern.find(path)).unwrap();
                black_box(map.len());
            }
        });
    });

    // dispatcher-style probe: try every pattern until one matches
    c.bench_function("probe", |b| {
        b.iter(|| {
            for path in black_box(&paths) {
                let map = patterns.iter().find_map(|pattern| pattern.find(path));
                assert!(black_box(map).is_some());
            }
        });
    });
}

criterion_group!(benches, compile_and_match);
criterion_main!(benches);
