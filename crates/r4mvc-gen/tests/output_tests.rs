use r4mvc_gen::ir::load_controllers;
use r4mvc_gen::{ControllerDefinition, Generator, GeneratorError, Settings, ViewDefinition};

fn controllers() -> Vec<ControllerDefinition> {
    vec![
        ControllerDefinition::new("Home").with_namespace("Project.Controllers"),
        ControllerDefinition::new("Shared")
            .with_view(ViewDefinition::new("Layout", "~/Views/Shared/_Layout.cshtml")),
    ]
}

#[test]
fn rendered_file_contains_every_class() {
    let mut controllers = controllers();
    let generator = Generator::new(Settings::default());
    let output = generator.generate(&mut controllers).unwrap();
    let text = generator.render(&output);

    assert!(text.contains("namespace R4Mvc\n{\n"));
    assert!(text.contains("    public static partial class MVC\n"));
    assert!(text.contains(
        "        public static readonly Project.Controllers.HomeController Home = new Project.Controllers.HomeController();\n"
    ));
    assert!(text.contains(
        "        public static readonly R4Mvc.SharedController Shared = new R4Mvc.SharedController();\n"
    ));
    assert!(text.contains("    public partial class SharedController\n"));
    assert!(text.contains("        public readonly string Layout = \"~/Views/Shared/_Layout.cshtml\";\n"));
    assert!(text.contains("internal partial class R4Mvc_Microsoft_AspNetCore_Mvc_ActionResult : ActionResult, IR4MvcActionResult\n"));
    assert!(text.ends_with("#pragma warning restore 1591, 3008, 3009, 0108\n"));
}

#[test]
fn write_output_creates_directories_and_skips_unchanged() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("obj").join("R4Mvc.generated.cs");

    let mut controllers = controllers();
    let generator = Generator::new(Settings::default());
    let output = generator.generate(&mut controllers).unwrap();

    assert!(generator.write_output(&output, &path).unwrap());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), generator.render(&output));

    // Second write with identical content is a no-op
    assert!(!generator.write_output(&output, &path).unwrap());
}

#[test]
fn write_output_reports_unreadable_existing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("R4Mvc.generated.cs");
    let garbage = [0xff, 0xfe, 0xfd];
    std::fs::write(&path, garbage).unwrap();

    let mut controllers = controllers();
    let generator = Generator::new(Settings::default());
    let output = generator.generate(&mut controllers).unwrap();

    let err = generator.write_output(&output, &path).unwrap_err();
    assert!(matches!(err, GeneratorError::IoError { .. }));
    assert_eq!(std::fs::read(&path).unwrap(), garbage);
}

#[test]
fn metadata_file_round_trip_through_generator() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("controllers.json");
    std::fs::write(
        &path,
        r#"[
            { "name": "Shared", "views": [{ "name": "Error", "relativePath": "~/Views/Shared/Error.cshtml" }] },
            { "name": "Shared", "area": "Admin" },
            { "name": "Shared", "namespace": "Project" }
        ]"#,
    )
    .unwrap();

    let mut controllers = load_controllers(&path).unwrap();
    let output = Generator::new(Settings::default()).generate(&mut controllers).unwrap();

    let names: Vec<&str> = output.classes.iter().map(|c| c.identifier().value()).collect();
    assert!(names.contains(&"SharedController"));
    assert!(names.contains(&"AdminArea_SharedController"));
    assert!(names.contains(&"AdminAreaClass"));
}
