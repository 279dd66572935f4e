use super::*;

#[test]
fn single_cube_line_test() {
    let cubes = generate(1);

    assert_eq!(cubes.len(), 1);
    assert_eq!(
        cubes[0].to_string(),
        "shape_create cube_0 cube \"\" (1000,1000) (20,20) filled true \
         bg #ffffff stroke 1 stroke_color #666666"
    );
}

#[test]
fn cube_count_test() {
    assert_eq!(generate(2).len(), 8);
    assert_eq!(generate(3).len(), 27);
    assert!(generate(0).is_empty());
    assert!(generate(-2).is_empty());
}

#[test]
fn cube_ids_test() {
    let cubes = generate(3);

    for (expected, cube) in cubes.iter().enumerate() {
        assert_eq!(cube.id, expected as u64);
        assert!(cube.to_string().starts_with(&format!(
            "shape_create cube_{expected} cube"
        )));
    }
}

#[test]
fn cube_position_test() {
    let cubes = generate(2);

    // Row-major with k innermost, so (1,1,1) is the last cube of the eight.
    let last = &cubes[7];
    assert_eq!((last.x, last.y), (1010, 1010));

    // (0,0,1): only the k shear applies.
    let sheared = &cubes[1];
    assert_eq!((sheared.x, sheared.y), (990, 990));
}

#[test]
fn cube_corner_colors_test() {
    let cubes = generate(2);

    // (0,0,0) sits at the channel floor on all three axes.
    assert_eq!(cubes[0].fill.to_string(), "#696969");

    // (1,1,1) saturates all three channels.
    assert_eq!(cubes[7].fill.to_string(), "#ffffff");
}

#[test]
fn render_document_test() {
    assert_eq!(render(&[]), "");

    let document = render(&generate(2));
    let lines: Vec<&str> = document.lines().collect();

    assert_eq!(lines.len(), 8);
    assert!(document.ends_with('\n'));

    for (id, line) in lines.iter().enumerate() {
        assert!(line.starts_with(&format!("shape_create cube_{id} ")));
        assert!(line.ends_with("stroke 1 stroke_color #666666"));
    }
}
