mod common;

use common::UniverseBuilder;
use glyphlife_lib::engine::font::letter_pixels;
use glyphlife_lib::engine::Seeding;

#[test]
fn test_print_letter_only_adds_cells() {
    let mut universe = UniverseBuilder::new(80, 50).with_cells(&[(70, 45)]).build();
    universe.print_letter(0, 'H');
    assert!(universe.cell(70, 45).is_alive());
    assert_eq!(universe.population(), 1 + letter_pixels('H').count() * 5);
}

#[test]
fn test_space_prints_nothing() {
    let mut universe = UniverseBuilder::new(60, 50).build();
    universe.print_letter(2, ' ');
    assert_eq!(universe.population(), 0);
}

#[test]
fn test_slots_do_not_overlap() {
    let mut universe = UniverseBuilder::new(200, 50).build();
    universe.print_letter(0, 'A');
    let one = universe.population();
    universe.print_letter(1, 'A');
    assert_eq!(universe.population(), 2 * one);
}

#[test]
fn test_banner_matches_manual_stamping() {
    let banner = UniverseBuilder::new(320, 60)
        .with_seeding(Seeding::Banner {
            text: "Hi!".to_string(),
        })
        .build();
    let mut manual = UniverseBuilder::new(320, 60).build();
    for (slot, ch) in "Hi!".chars().enumerate() {
        manual.print_letter(slot as u32, ch);
    }
    assert_eq!(banner.cells(), manual.cells());
}

#[test]
fn test_stamped_letters_evolve() {
    let mut universe = UniverseBuilder::new(100, 50).build();
    universe.print_letter(0, 'X');
    let before = universe.cells().to_vec();
    universe.tick();
    assert_ne!(universe.cells(), &before[..]);
}
