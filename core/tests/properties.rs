//! Property tests: random operation scripts give identical results on both
//! representations, and the contract laws hold for any input.

use numseq_core::script::{Operation, RunOptions, Script};
use numseq_core::{ArraySequence, LinkedSequence, NumberSequence, SequenceError};
use proptest::prelude::*;

fn number() -> impl Strategy<Value = f64> {
    // Small integers produce plenty of duplicates and equal neighbors.
    prop_oneof![(-5i32..5).prop_map(f64::from), -1.0e3..1.0e3f64]
}

fn numbers() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(number(), 2..12)
}

fn operation() -> impl Strategy<Value = Operation> {
    let position = 0usize..14;
    prop_oneof![
        number().prop_map(Operation::Add),
        (position.clone(), number())
            .prop_map(|(position, number)| Operation::Insert { position, number }),
        position.clone().prop_map(Operation::Remove),
        position.prop_map(Operation::At),
        number().prop_map(Operation::Position),
        number().prop_map(Operation::Contains),
        Just(Operation::Upper),
        Just(Operation::Lower),
        Just(Operation::Len),
        Just(Operation::Increasing),
        Just(Operation::Decreasing),
        Just(Operation::Array),
        Just(Operation::Show),
    ]
}

proptest! {
    #[test]
    fn same_script_same_transcript(
        initial in numbers(),
        operations in prop::collection::vec(operation(), 0..40),
    ) {
        let script: Script = operations.into_iter().collect();
        let options = RunOptions::default();

        let mut array = ArraySequence::new(&initial).unwrap();
        let mut linked = LinkedSequence::new(&initial).unwrap();
        let array_transcript = script.run(&mut array, &options);
        let linked_transcript = script.run(&mut linked, &options);

        prop_assert_eq!(array_transcript, linked_transcript);
        prop_assert_eq!(array.to_vec(), linked.to_vec());
        prop_assert!(array.len() >= 2);
    }

    #[test]
    fn construction_keeps_length(initial in numbers()) {
        prop_assert_eq!(ArraySequence::new(&initial).unwrap().len(), initial.len());
        prop_assert_eq!(LinkedSequence::new(&initial).unwrap().len(), initial.len());
    }

    #[test]
    fn short_input_is_rejected(initial in prop::collection::vec(number(), 0..2)) {
        let expected = SequenceError::InvalidConstruction { length: initial.len() };
        prop_assert_eq!(ArraySequence::new(&initial).unwrap_err(), expected);
        prop_assert_eq!(LinkedSequence::new(&initial).unwrap_err(), expected);
    }

    #[test]
    fn insert_then_read_back(initial in numbers(), x in number(), seed in any::<prop::sample::Index>()) {
        let position = seed.index(initial.len());
        let mut linked = LinkedSequence::new(&initial).unwrap();
        let mut array = ArraySequence::new(&initial).unwrap();
        let sequences: [&mut dyn NumberSequence; 2] = [&mut linked, &mut array];
        for seq in sequences {
            let displaced = seq.number_at(position).unwrap();
            seq.insert(position, x).unwrap();
            prop_assert_eq!(seq.number_at(position).unwrap(), x);
            prop_assert_eq!(seq.number_at(position + 1).unwrap(), displaced);
            prop_assert_eq!(seq.len(), initial.len() + 1);
        }
    }

    #[test]
    fn position_of_finds_first_index(initial in numbers(), seed in any::<prop::sample::Index>()) {
        let p = seed.index(initial.len());
        let linked = LinkedSequence::new(&initial).unwrap();
        let array = ArraySequence::new(&initial).unwrap();
        let expected = initial.iter().position(|&n| n == initial[p]);
        prop_assert_eq!(linked.position_of(initial[p]), expected);
        prop_assert_eq!(array.position_of(initial[p]), expected);
    }

    #[test]
    fn bounds_enclose_every_number(initial in numbers()) {
        let linked = LinkedSequence::new(&initial).unwrap();
        let array = ArraySequence::new(&initial).unwrap();
        let sequences: [&dyn NumberSequence; 2] = [&linked, &array];
        for seq in sequences {
            prop_assert!(initial.iter().all(|&n| seq.lower_bound() <= n && n <= seq.upper_bound()));
            prop_assert!(seq.contains(seq.upper_bound()));
            prop_assert!(seq.contains(seq.lower_bound()));
            prop_assert!(!(seq.is_increasing() && seq.is_decreasing()));
        }
    }
}
