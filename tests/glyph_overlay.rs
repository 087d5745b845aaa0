mod common;

use common::UniverseBuilder;
use glyphlife_lib::engine::patterns::{BLINKER, BLOCK};

#[test]
fn test_glyphs_are_display_only() {
    let mut painted = UniverseBuilder::new(10, 10).with_pattern(&BLINKER, 3, 3).build();
    let mut plain = UniverseBuilder::new(10, 10).with_pattern(&BLINKER, 3, 3).build();

    painted.write_glyphs(100, 'Z');
    assert_eq!(painted.cells(), plain.cells());
    for _ in 0..5 {
        painted.tick();
        plain.tick();
        assert_eq!(painted.cells(), plain.cells());
    }
}

#[test]
fn test_glyphs_land_on_distinct_cells() {
    let mut universe = UniverseBuilder::new(8, 8).build();
    universe.write_glyphs(20, 'g');
    let painted = universe.render().chars().filter(|&c| c == 'g').count();
    assert_eq!(painted, 20);
    assert_eq!(universe.stats().glyphs, 20);
}

#[test]
fn test_glyph_visible_only_through_render() {
    let mut universe = UniverseBuilder::new(3, 3).build();
    universe.write_glyphs(9, 'm');
    assert_eq!(universe.render(), "mmm\nmmm\nmmm\n");
    assert_eq!(universe.glyph(1, 1), Some('m'));
    assert_eq!(universe.population(), 0);
}

#[test]
fn test_persistent_glyphs_survive_ticks() {
    let mut universe = UniverseBuilder::new(5, 5).with_pattern(&BLOCK, 1, 1).build();
    universe.write_glyphs(25, '+');
    universe.tick_n(10);
    assert_eq!(universe.stats().glyphs, 25);
}

#[test]
fn test_glyph_lifetime_expires() {
    let mut universe = UniverseBuilder::new(6, 6)
        .with_config(|c| c.glyphs.lifetime = Some(3))
        .build();
    universe.write_glyphs(36, '~');
    universe.tick_n(2);
    assert_eq!(universe.stats().glyphs, 36);
    universe.tick();
    assert_eq!(universe.stats().glyphs, 0);
    assert_eq!(universe.render(), "......\n".repeat(6));
}

#[test]
fn test_rewrite_refreshes_lifetime() {
    let mut universe = UniverseBuilder::new(2, 2)
        .with_config(|c| c.glyphs.lifetime = Some(2))
        .build();
    universe.write_glyphs(4, 'a');
    universe.tick();
    universe.write_glyphs(4, 'b');
    universe.tick();
    assert_eq!(universe.render(), "bb\nbb\n");
    universe.tick();
    assert_eq!(universe.render(), "..\n..\n");
}

#[test]
fn test_clear_glyphs_keeps_cells() {
    let mut universe = UniverseBuilder::new(6, 6).with_pattern(&BLOCK, 2, 2).build();
    universe.write_glyphs(36, '?');
    universe.clear_glyphs();
    assert_eq!(universe.population(), 4);
    assert_eq!(universe.render(), "......\n......\n..##..\n..##..\n......\n......\n");
}

#[test]
fn test_unicode_glyph() {
    let mut universe = UniverseBuilder::new(2, 1).build();
    universe.write_glyphs(2, 'ж');
    assert_eq!(universe.render(), "жж\n");
}
