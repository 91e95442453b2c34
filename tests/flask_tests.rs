#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use apispec_webframeworks::error::{RegistryError, SpecError};
use apispec_webframeworks::flask::{DocumentedBlueprint, FlaskApp, FlaskPlugin, MethodView};
use apispec_webframeworks::handler::{Handler, HandlerClass};
use apispec_webframeworks::spec::{ApiSpec, Operations, PathArgs};
use common::{get_paths, init_test_logging, specs, yaml};

fn flask_specs() -> Vec<ApiSpec> {
    specs(FlaskPlugin::new)
}

fn greeting_api(with_delete: bool) -> HandlerClass {
    let get = Handler::builder("get")
        .doc(
            "A greeting endpoint.
            ---
            description: get a greeting
            responses:
                200:
                    description: said hi
            ",
        )
        .build();
    let builder = HandlerClass::builder("HelloApi")
        .doc(
            "Greeting API.
            ---
            x-extension: global metadata
            ",
        )
        .method("get", get)
        .method("post", Handler::builder("post").build());
    if with_delete {
        builder.method("delete", Handler::builder("delete").build()).build()
    } else {
        builder.build()
    }
}

#[test]
fn test_gist_detail_end_to_end() {
    let _log = init_test_logging();
    for mut spec in flask_specs() {
        let app = FlaskApp::new("gists");
        let gist_detail = Handler::builder("gist_detail")
            .doc(
                "Gist detail view.
                ---
                x-extension: metadata
                get:
                    responses:
                        200:
                            schema:
                                $ref: '#/definitions/Gist'
                ",
            )
            .params(["gist_id"])
            .build();
        app.route("/gists/<gist_id>", None, &gist_detail).unwrap();

        {
            let _ctx = app.app_context();
            spec.path(PathArgs::new().view(&gist_detail)).unwrap();
        }

        let paths = get_paths(&spec);
        assert_eq!(
            paths,
            yaml(
                "/gists/{gist_id}:
                   x-extension: metadata
                   get:
                     responses:
                       200:
                         schema:
                           $ref: '#/definitions/Gist'"
            )
        );
    }
}

#[test]
fn test_path_from_view_with_caller_operations() {
    for mut spec in flask_specs() {
        let app = FlaskApp::new("app");
        let hello = Handler::builder("hello").doc("Say hi.").build();
        app.route("/hello", None, &hello).unwrap();

        let operations: Operations =
            serde_yaml::from_str("get: {parameters: [], responses: {'200': {}}}").unwrap();
        spec.path(PathArgs::new().view(&hello).app(&app).operations(operations))
            .unwrap();

        let paths = get_paths(&spec);
        assert_eq!(
            paths["/hello"]["get"],
            yaml("{parameters: [], responses: {'200': {}}}")
        );
    }
}

#[test]
fn test_path_from_method_view() {
    for mut spec in flask_specs() {
        let app = FlaskApp::new("app");
        let method_view = MethodView::as_view(&greeting_api(false), "hi");
        app.add_url_rule("/hi", None, &method_view, Some(&["GET", "POST"]))
            .unwrap();

        spec.path(PathArgs::new().view(&method_view).app(&app)).unwrap();

        let paths = get_paths(&spec);
        assert_eq!(
            paths["/hi"]["get"],
            yaml("{description: get a greeting, responses: {200: {description: said hi}}}")
        );
        assert_eq!(paths["/hi"]["post"], yaml("{}"));
        assert_eq!(paths["/hi"]["x-extension"], "global metadata");
    }
}

#[test]
fn test_methods_from_rule() {
    for mut spec in flask_specs() {
        let app = FlaskApp::new("app");
        let method_view = MethodView::as_view(&greeting_api(true), "hi");
        app.add_url_rule("/hi", None, &method_view, Some(&["GET", "POST"]))
            .unwrap();

        spec.path(PathArgs::new().view(&method_view).app(&app)).unwrap();

        let item = &spec.paths()["/hi"];
        assert!(item.contains_key("get"));
        assert!(item.contains_key("post"));
        assert!(!item.contains_key("delete"));
    }
}

#[test]
fn test_extraction_is_idempotent() {
    let app = FlaskApp::new("app");
    let method_view = MethodView::as_view(&greeting_api(true), "hi");
    app.add_url_rule("/hi", None, &method_view, None).unwrap();

    let mut first = ApiSpec::new("A", "1", "3.0.0").plugin(FlaskPlugin::new());
    let mut second = ApiSpec::new("A", "1", "3.0.0").plugin(FlaskPlugin::new());
    first.path(PathArgs::new().view(&method_view).app(&app)).unwrap();
    second.path(PathArgs::new().view(&method_view).app(&app)).unwrap();
    assert_eq!(first.paths(), second.paths());
}

#[test]
fn test_path_with_multiple_methods() {
    for mut spec in flask_specs() {
        let app = FlaskApp::new("app");
        let hello = Handler::builder("hello").doc("Hello.").build();
        app.route("/hello", Some(&["GET", "POST"]), &hello).unwrap();

        let operations: Operations = serde_yaml::from_str(
            "get: {description: get a greeting, responses: {'200': {}}}\n\
             post: {description: post a greeting, responses: {'200': {}}}",
        )
        .unwrap();
        spec.path(PathArgs::new().view(&hello).app(&app).operations(operations))
            .unwrap();

        let paths = get_paths(&spec);
        assert_eq!(paths["/hello"]["get"]["description"], "get a greeting");
        assert_eq!(paths["/hello"]["post"]["description"], "post a greeting");
    }
}

#[test]
fn test_integration_with_docstring_introspection() {
    for mut spec in flask_specs() {
        let app = FlaskApp::new("app");
        let hello = Handler::builder("hello")
            .doc(
                "A greeting endpoint.

                ---
                x-extension: value
                get:
                    description: get a greeting
                    responses:
                        200:
                            description: a pet to be returned
                            schema:
                                $ref: '#/definitions/Pet'

                post:
                    description: post a greeting
                    responses:
                        200:
                            description: some data

                foo:
                    description: not a valid operation
                    responses:
                        200:
                            description:
                                more junk
                ",
            )
            .build();
        app.route("/hello", None, &hello).unwrap();

        spec.path(PathArgs::new().view(&hello).app(&app)).unwrap();

        let paths = get_paths(&spec);
        assert_eq!(paths["/hello"]["get"]["description"], "get a greeting");
        assert_eq!(paths["/hello"]["post"]["description"], "post a greeting");
        assert_eq!(paths["/hello"]["x-extension"], "value");
        assert!(paths["/hello"].get("foo").is_none());
    }
}

#[test]
fn test_path_is_translated_to_openapi_template() {
    for mut spec in flask_specs() {
        let app = FlaskApp::new("app");
        let get_pet = Handler::builder("get_pet").doc("Pet.").build();
        app.route("/pet/<int:pet_id>", None, &get_pet).unwrap();

        spec.path(PathArgs::new().view(&get_pet).app(&app)).unwrap();
        assert!(spec.paths().contains_key("/pet/{pet_id}"));
    }
}

fn blueprint_view(name: &str, doc: &str) -> Handler {
    Handler::builder(name).doc(doc).build()
}

#[test]
fn test_blueprint_documented_route() {
    for mut spec in flask_specs() {
        let app = FlaskApp::new("app");
        let mut blueprint = DocumentedBlueprint::new("test");
        let view = blueprint_view("test", "Hello.");
        blueprint.route("/test", None, &view);
        blueprint.register(&app, &mut spec, None).unwrap();

        assert!(spec.paths().contains_key("/test"));
        assert_eq!(app.rules_for_endpoint("test.test").len(), 1);
    }
}

#[test]
fn test_blueprint_undocumented_route() {
    for mut spec in flask_specs() {
        let app = FlaskApp::new("app");
        let mut blueprint = DocumentedBlueprint::new("test");
        let view = blueprint_view("test", "Hello.");
        blueprint.add_url_rule("/test", None, &view, None, false);
        blueprint.register(&app, &mut spec, None).unwrap();

        assert!(!spec.paths().contains_key("/test"));
        assert_eq!(app.rules_for_endpoint("test.test").len(), 1);
    }
}

#[test]
fn test_blueprint_docstring_introspection() {
    for mut spec in flask_specs() {
        let app = FlaskApp::new("app");
        let mut blueprint = DocumentedBlueprint::new("test");
        let view = blueprint_view(
            "test",
            "A test endpoint.
            ---
            get:
                description: Test description
                responses:
                    200:
                        description: Test OK answer
            ",
        );
        blueprint.route("/test", None, &view);
        blueprint.register(&app, &mut spec, None).unwrap();

        let paths = get_paths(&spec);
        assert_eq!(paths["/test"]["get"]["description"], "Test description");
    }
}

#[test]
fn test_blueprint_multiple_routes_on_one_rule() {
    for mut spec in flask_specs() {
        let app = FlaskApp::new("app");
        let mut blueprint = DocumentedBlueprint::new("test");
        let test_get = blueprint_view(
            "test_get",
            "A test endpoint.
            ---
            get:
                description: Get test description
            ",
        );
        let test_post = blueprint_view(
            "test_post",
            "A test endpoint.
            ---
            post:
                description: Post test description
            ",
        );
        blueprint.route("/test", None, &test_get);
        blueprint.route("/test", Some(&["POST"]), &test_post);
        blueprint.register(&app, &mut spec, None).unwrap();

        let paths = get_paths(&spec);
        assert_eq!(paths["/test"]["get"]["description"], "Get test description");
        assert_eq!(paths["/test"]["post"]["description"], "Post test description");
    }
}

#[test]
fn test_blueprint_add_url_rule_for_same_view() {
    for mut spec in flask_specs() {
        let app = FlaskApp::new("app");
        let mut blueprint = DocumentedBlueprint::new("test");
        let index = blueprint_view(
            "index",
            "
            Gist detail view.
            ---
            x-extension: metadata
            get:
                description: Get gist detail
            ",
        );
        blueprint.route("/", None, &index);
        blueprint.add_url_rule("/", None, &index, Some(&["POST"]), true);
        blueprint.register(&app, &mut spec, None).unwrap();

        let paths = get_paths(&spec);
        assert_eq!(paths["/"]["get"]["description"], "Get gist detail");
        assert_eq!(app.rules_for_endpoint("test.index").len(), 2);
    }
}

#[test]
fn test_blueprint_method_view() {
    for mut spec in flask_specs() {
        let app = FlaskApp::new("app");
        let crud = HandlerClass::builder("Crud")
            .doc(
                "
                Crud methodview.
                ---
                x-extension: global metadata
                ",
            )
            .method(
                "get",
                blueprint_view("get", "Crud get view.\n---\ndescription: Crud get view.\n"),
            )
            .method(
                "post",
                blueprint_view("post", "Crud post view.\n---\ndescription: Crud post view.\n"),
            )
            .build();
        let mut blueprint = DocumentedBlueprint::new("test");
        blueprint.add_url_rule("/crud", None, &MethodView::as_view(&crud, "crud_view"), None, true);
        blueprint.register(&app, &mut spec, None).unwrap();

        let paths = get_paths(&spec);
        assert_eq!(paths["/crud"]["get"]["description"], "Crud get view.");
        assert_eq!(paths["/crud"]["post"]["description"], "Crud post view.");
        assert_eq!(paths["/crud"]["x-extension"], "global metadata");
    }
}

#[test]
fn test_blueprint_url_prefix() {
    let mut spec = ApiSpec::new("A", "1", "3.0.0").plugin(FlaskPlugin::new());
    let app = FlaskApp::new("app");
    let mut blueprint = DocumentedBlueprint::new("gistapi");
    let view = blueprint_view("gist_detail", "Gist.\n---\nget:\n  description: gist\n");
    blueprint.route("/gists/<int:gist_id>", None, &view);
    blueprint.register(&app, &mut spec, Some("/api/v1/")).unwrap();

    assert!(spec.paths().contains_key("/api/v1/gists/{gist_id}"));
}

#[test]
fn test_blueprint_registration_stops_at_endpoint_clash() {
    let mut spec = ApiSpec::new("A", "1", "3.0.0").plugin(FlaskPlugin::new());
    let app = FlaskApp::new("app");
    let existing = blueprint_view("existing", "Existing.");
    app.add_url_rule("/existing", Some("test.test"), &existing, None)
        .unwrap();

    let mut blueprint = DocumentedBlueprint::new("test");
    let clashing = blueprint_view("test", "Clashing.\n---\nget:\n  description: clash\n");
    let later = blueprint_view("later", "Later.\n---\nget:\n  description: later\n");
    blueprint.route("/test", None, &clashing);
    blueprint.route("/later", None, &later);

    let err = blueprint.register(&app, &mut spec, None).unwrap_err();
    assert!(matches!(
        err,
        SpecError::Registry(RegistryError::EndpointOverwrite { ref endpoint }) if endpoint == "test.test"
    ));
    assert!(app.rules_for_endpoint("test.later").is_empty());
    assert!(spec.paths().is_empty());
}
