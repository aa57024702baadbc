use std::fs;
use std::path::{Path, PathBuf};

use bake_app::{BakeConfig, Baker};
use bake_assets::emit::read_points;
use bake_core::glam::Vec2;

const TINY_BDF: &str = "\
STARTFONT 2.1
FONTBOUNDINGBOX 4 3 0 0
STARTPROPERTIES 1
WEIGHT_NAME \"Bold\"
ENDPROPERTIES
CHARS 1
STARTCHAR A
ENCODING 65
BITMAP
F0
90
60
ENDCHAR
ENDFONT
";

fn svg(view_box: &str, body: &str) -> String {
    format!(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{view_box}">{body}</svg>"#)
}

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("bake-pipeline-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn put(root: &Path, rel: &str, text: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn asset_tree(name: &str) -> PathBuf {
    let root = scratch(name);
    put(
        &root,
        "model/game/ship.svg",
        &svg("0 0 10 10", r#"<g><path d="M 0,0 L 10,0"/></g>"#),
    );
    put(
        &root,
        "model/fonts/vector/upper-a.svg",
        &svg("0 0 4 6", r#"<g><path d="M 0,0 L 4,0"/></g>"#),
    );
    put(&root, "font/terminus/tiny.bdf", TINY_BDF);
    root
}

#[test]
fn bakes_whole_tree() {
    let root = asset_tree("whole");
    let output = Baker::new(&root)
        .with_config(BakeConfig::default().with_atlas_preview(true))
        .run()
        .unwrap();

    assert_eq!(output.model_count, 1);
    assert_eq!(output.model_font_count, 1);
    assert_eq!(output.atlases.len(), 1);

    let out = root.join("src");
    let model_c = fs::read_to_string(out.join("model.c")).unwrap();
    let model_data = fs::read_to_string(out.join("model.data")).unwrap();
    assert!(model_c.contains("Model ModelShip = {"));
    assert!(model_c.contains("ModelFont VectorFont = {"));
    assert!(model_c.contains(".Data = VectorChar65Data,"));

    // y flipped against the 10 unit canvas
    let points = read_points(&model_data, "Ship").unwrap();
    assert_eq!(points, vec![Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0)]);

    let font_c = fs::read_to_string(out.join("font.c")).unwrap();
    let font_data = fs::read_to_string(out.join("font.data")).unwrap();
    assert!(font_c.contains("Font Tiny3Bold = {"));
    assert!(font_c.contains(".Chars = 128,"));
    assert_eq!(font_data.matches("0x").count(), 4 * 3 * 128 * 4);

    assert!(out.join("Tiny3Bold.png").is_file());
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn output_is_deterministic() {
    let root = asset_tree("repeat");
    let first = Baker::new(&root).compile().unwrap();
    let second = Baker::new(&root).compile().unwrap();
    assert_eq!(first.models, second.models);
    assert_eq!(first.fonts, second.fonts);
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn failing_asset_writes_nothing() {
    let root = asset_tree("broken");
    put(
        &root,
        "model/game/zz.svg",
        &svg("0 0 10 10", r#"<g><path d="M 0,0 Q 1,1"/></g>"#),
    );

    let err = Baker::new(&root).run().unwrap_err();
    assert!(format!("{err:#}").contains("zz.svg"));
    assert!(!root.join("src").exists());
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn empty_root_still_emits_preambles() {
    let root = scratch("empty");
    let output = Baker::new(&root)
        .with_config(BakeConfig::default().with_out_dir("gen"))
        .run()
        .unwrap();

    assert_eq!(output.model_count, 0);
    let model_c = fs::read_to_string(root.join("gen/model.c")).unwrap();
    assert!(model_c.starts_with("#include \"model.h\""));
    assert!(root.join("gen/font.data").is_file());
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn config_file_is_honoured() {
    let root = asset_tree("configured");
    put(&root, "bake.toml", "out_dir = \"out\"\n");
    let config = BakeConfig::load(&root).unwrap();
    Baker::new(&root).with_config(config).run().unwrap();
    assert!(root.join("out/font.c").is_file());
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn clashing_data_arrays_abort() {
    let root = asset_tree("clash");
    // emits VectorChar65Data, already defined for the 'A' of the vector font
    put(
        &root,
        "model/game/vectorChar65.svg",
        &svg("0 0 1 1", r#"<g><path d="M0,0 L1,1"/></g>"#),
    );

    let err = Baker::new(&root).run().unwrap_err();
    let text = format!("{err:#}");
    assert!(text.contains("vectorChar65.svg"), "{text}");
    assert!(text.contains("VectorChar65Data"), "{text}");
    assert!(!root.join("src").exists());
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn preamble_type_names_are_reserved() {
    let root = scratch("reserved");
    // Model + Font would redefine the ModelFont typedef
    put(
        &root,
        "model/game/font.svg",
        &svg("0 0 1 1", r#"<g><path d="M0,0 L1,1"/></g>"#),
    );

    let err = Baker::new(&root).compile().unwrap_err();
    assert!(format!("{err:#}").contains("ModelFont"));
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn stems_outside_c_identifiers_are_rejected() {
    let root = scratch("stems");
    put(&root, "font/ter-u16b.bdf", TINY_BDF);

    let err = Baker::new(&root).compile().unwrap_err();
    let text = format!("{err:#}");
    assert!(text.contains("ter-u16b.bdf"), "{text}");
    assert!(text.contains("not a valid C identifier"), "{text}");
    fs::remove_dir_all(&root).unwrap();
}
