use urlpat::{Part, Pattern};

macro_rules! display_tests {
    ($($name:ident {
        $($template:literal => $canonical:literal),* $(,)?
    }),* $(,)?) => { $(
        #[test]
        fn $name() {
            $(
                let pattern = Pattern::parse($template);
                assert_eq!(
                    pattern.to_string(),
                    $canonical,
                    "wrong canonical form for '{}'", $template
                );
            )*
        }
    )* };
}

display_tests! {
    canonical_templates_round_trip {
        "" => "",
        "/users/{id}" => "/users/{id}",
        "/users/{id}/posts/{post}" => "/users/{id}/posts/{post}",
        "/files/*" => "/files/*",
        "/a/b/c" => "/a/b/c",
        "/{a}/{b}" => "/{a}/{b}",
    },
    lenient_templates_canonicalize {
        "/" => "",
        "//a//b///" => "/a/b",
        "a" => "/a",
        "/{id" => "/{id}",
        "/{}" => "/{}",
        "/files/*filepath" => "/files/*",
        "*" => "/*",
    },
}

// Serializing and re-parsing reaches a fixed point (wildcard labels are
// dropped by Display, so only unlabeled templates can be compared whole).
#[test]
fn canonical_form_is_a_fixed_point() {
    for template in ["", "/", "//a//b", "/users/{id}", "/{x}/{x}", "/files/*", "/{id"] {
        let pattern = Pattern::parse(template);
        let reparsed = Pattern::parse(&pattern.to_string());
        assert_eq!(pattern, reparsed, "template '{}'", template);
    }
}

#[test]
fn parts_expose_enough_for_a_path_builder() {
    let pattern = Pattern::parse("/users/{id}/posts/*");

    let mut built = String::new();
    for part in &pattern {
        built.push('/');
        match part {
            Part::Const(text) => built.push_str(text),
            Part::Var(name) => {
                assert_eq!(name, "id", "no value supplied for '{{{}}}'", name);
                built.push('7');
            }
            Part::Wildcard(_) => built.push_str("2024/intro"),
        }
    }

    assert_eq!(built, "/users/7/posts/2024/intro");

    let map = pattern.find(&built).unwrap();
    assert_eq!(map.get("id"), Some("7"));
    assert_eq!(map.tail(), Some("2024/intro"));
}

#[test]
fn wildcard_label_is_stored_but_inert() {
    let pattern = Pattern::parse("/static/*filepath");
    assert_eq!(
        pattern.parts().last(),
        Some(&Part::Wildcard(Some("filepath".to_owned())))
    );

    let unlabeled = Pattern::parse("/static/*");
    assert_eq!(unlabeled.parts().last(), Some(&Part::Wildcard(None)));
}

#[test]
fn wildcard_is_always_last() {
    for template in ["*", "/a/*", "/a/*/b", "/*tail/{x}/y"] {
        let pattern = Pattern::parse(template);
        let parts = pattern.parts();
        assert!(
            matches!(parts.last(), Some(Part::Wildcard(_))),
            "template '{}'", template
        );
        assert_eq!(
            parts.iter().filter(|p| matches!(p, Part::Wildcard(_))).count(),
            1,
            "template '{}'", template
        );
    }
}
