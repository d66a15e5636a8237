//! Behavioural tests for the nickname crate.
//!
//! These tests validate the crate's behaviour against Gherkin scenarios
//! covering deterministic generation, separator handling, and word lists.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::path::PathBuf;

use nickname::{
    ADJECTIVES, ANIMALS, Nickname, NicknameGenerator, WordListError, WordListKind, WordLists,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

// ============================================================================
// Test fixtures and constants
// ============================================================================

const NIL_UUID: &str = "00000000-0000-0000-0000-000000000000";

const HYPHENATED_UUID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

/// Test world holding inputs and generated nicknames.
#[derive(Default, ScenarioState)]
struct World {
    identifier: Slot<String>,
    word_lists: Slot<WordLists>,
    json_input: Slot<String>,
    parse_result: Slot<Result<WordLists, WordListError>>,
    nickname: Slot<Nickname>,
    second_nickname: Slot<Nickname>,
}

impl World {
    /// Builds a generator from the configured word lists, or the built-in ones.
    fn generator(&self) -> NicknameGenerator {
        self.word_lists
            .get()
            .map_or_else(NicknameGenerator::default, NicknameGenerator::new)
    }

    /// Extracts the identifier from the world state.
    fn identifier(&self) -> String {
        self.identifier.get().expect("identifier should be set")
    }

    /// Extracts the first generated nickname from the world state.
    fn nickname(&self) -> Nickname {
        self.nickname.get().expect("nickname should be generated")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the nil UUID identifier")]
fn the_nil_uuid_identifier(world: &World) {
    world.identifier.set(NIL_UUID.to_owned());
}

#[given("an empty identifier")]
fn an_empty_identifier(world: &World) {
    world.identifier.set(String::new());
}

#[given("a hyphenated UUID identifier")]
fn a_hyphenated_uuid_identifier(world: &World) {
    world.identifier.set(HYPHENATED_UUID.to_owned());
}

#[given("the fixture word lists")]
fn the_fixture_word_lists(world: &World) {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("word-lists.json");
    let lists = WordLists::from_file(&path).expect("fixture word lists load");
    world.word_lists.set(lists);
}

#[given("a word list document with a hyphenated animal")]
fn a_word_list_document_with_a_hyphenated_animal(world: &World) {
    let json = r#"{
        "version": 1,
        "adjectives": ["Steady"],
        "animals": ["Otter", "Sea-Lion"]
    }"#;
    world.json_input.set(json.to_owned());
}

// ============================================================================
// When steps
// ============================================================================

#[when("a nickname is generated")]
fn a_nickname_is_generated(world: &World) {
    let nickname = world.generator().generate(&world.identifier());
    world.nickname.set(nickname);
}

#[when("a nickname is generated twice")]
fn a_nickname_is_generated_twice(world: &World) {
    let generator = world.generator();
    let identifier = world.identifier();

    world.nickname.set(generator.generate(&identifier));
    world.second_nickname.set(generator.generate(&identifier));
}

#[when("nicknames are generated for the hyphenated and dense forms")]
fn nicknames_are_generated_for_both_forms(world: &World) {
    let generator = world.generator();
    let identifier = world.identifier();
    let dense = identifier.replace('-', "");

    world.nickname.set(generator.generate(&identifier));
    world.second_nickname.set(generator.generate(&dense));
}

#[when("the word lists are parsed")]
fn the_word_lists_are_parsed(world: &World) {
    let json_opt = world.json_input.get();
    let json = json_opt.expect("JSON input should be set");
    world.parse_result.set(WordLists::from_json(&json));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the nickname matches the regression baseline")]
fn the_nickname_matches_the_regression_baseline(world: &World) {
    assert_eq!(world.nickname().as_ref(), "Cheetah Focused");
}

#[then("the nickname uses the first animal and the first adjective")]
fn the_nickname_uses_the_first_words(world: &World) {
    let nickname = world.nickname();
    assert_eq!(nickname.animal(), ANIMALS[0]);
    assert_eq!(nickname.adjective(), ADJECTIVES[0]);
}

#[then("both nicknames are identical")]
fn both_nicknames_are_identical(world: &World) {
    let second_opt = world.second_nickname.get();
    let second = second_opt.expect("second nickname should be set");

    assert_eq!(world.nickname(), second, "Nicknames should be identical");
}

#[then("the nickname comes from the fixture word lists")]
fn the_nickname_comes_from_the_fixture_word_lists(world: &World) {
    let lists = world.word_lists.get().expect("word lists should be set");
    let nickname = world.nickname();

    assert!(lists.animals().words().iter().any(|w| w == nickname.animal()));
    assert!(
        lists
            .adjectives()
            .words()
            .iter()
            .any(|w| w == nickname.adjective())
    );
    assert_eq!(nickname.as_ref(), "Ibex Rowing");
}

#[then("parsing fails with an invalid word error")]
fn parsing_fails_with_an_invalid_word_error(world: &World) {
    let result = world.parse_result.get().expect("parse result should be set");
    match result {
        Err(WordListError::InvalidWord {
            list: WordListKind::Animals,
            index: 1,
            ..
        }) => {}
        other => panic!("Expected InvalidWord for animals, got: {other:?}"),
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/nickname.feature",
    name = "Nil UUID resolves to the pinned nickname"
)]
fn nil_uuid_resolves_to_the_pinned_nickname(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/nickname.feature",
    name = "Empty identifier uses the first words"
)]
fn empty_identifier_uses_the_first_words(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/nickname.feature",
    name = "Hyphens do not change the nickname"
)]
fn hyphens_do_not_change_the_nickname(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/nickname.feature",
    name = "Generation is deterministic"
)]
fn generation_is_deterministic(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/nickname.feature",
    name = "Custom word lists drive generation"
)]
fn custom_word_lists_drive_generation(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/nickname.feature",
    name = "Word lists with invalid words are rejected"
)]
fn word_lists_with_invalid_words_are_rejected(world: World) {
    let _ = world;
}
