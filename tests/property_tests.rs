// Copyright (c) 2025 Saorsa Labs Limited

// This file is part of the Saorsa P2P network.

// Licensed under the AGPL-3.0 license:
// <https://www.gnu.org/licenses/agpl-3.0.html>

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Property-based tests for the mnemonic codec
//!
//! This test suite uses proptest to verify the codec invariants across
//! the whole address space.

use proptest::prelude::*;
use saorsa_dip::codec::{SEPARATORS, encode_indices, split_address};
use saorsa_dip::{WordDictionary, WordIndex, decode_ipv4, encode_to_address};
use std::net::Ipv4Addr;
use std::sync::OnceLock;

fn dictionary() -> &'static WordDictionary {
    static DICT: OnceLock<WordDictionary> = OnceLock::new();
    DICT.get_or_init(|| WordDictionary::english().unwrap())
}

fn address_strategy() -> impl Strategy<Value = Ipv4Addr> {
    any::<u32>().prop_map(Ipv4Addr::from)
}

fn index_strategy() -> impl Strategy<Value = WordIndex> {
    (0u16..2048).prop_map(|i| WordIndex::new(i).unwrap())
}

fn separator_run() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(SEPARATORS.to_vec()), 1..4)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_round_trip_lower_half(address in address_strategy()) {
        let mnemonic = decode_ipv4(address, false, dictionary());
        prop_assert_eq!(encode_to_address(&mnemonic.to_string(), dictionary()), Some(address));
    }

    #[test]
    fn prop_round_trip_upper_half(address in address_strategy()) {
        let mnemonic = decode_ipv4(address, true, dictionary());
        prop_assert_eq!(encode_to_address(&mnemonic.to_string(), dictionary()), Some(address));
    }

    #[test]
    fn prop_halves_give_different_mnemonics(address in address_strategy()) {
        let lower = decode_ipv4(address, false, dictionary());
        let upper = decode_ipv4(address, true, dictionary());
        prop_assert_ne!(lower.to_string(), upper.to_string());
        prop_assert_eq!(&lower.words()[1..], &upper.words()[1..]);
    }

    #[test]
    fn prop_encode_is_deterministic(text in "[a-z.^_-]{0,40}") {
        prop_assert_eq!(
            encode_to_address(&text, dictionary()),
            encode_to_address(&text, dictionary())
        );
    }

    #[test]
    fn prop_any_separators_are_equivalent(
        a in index_strategy(),
        b in index_strategy(),
        c in index_strategy(),
        s1 in separator_run(),
        s2 in separator_run(),
    ) {
        let dict = dictionary();
        let words = [dict.word_at(a), dict.word_at(b), dict.word_at(c)];
        let canonical = words.join("-");
        let mixed = format!("{}{}{}{}{}", words[0], s1, words[1], s2, words[2]);

        prop_assert_eq!(encode_to_address(&mixed, dict), encode_to_address(&canonical, dict));
        prop_assert_eq!(encode_to_address(&canonical, dict), Some(encode_indices([a, b, c])));
    }

    #[test]
    fn prop_split_then_pack_is_identity(address in address_strategy(), top in any::<bool>()) {
        prop_assert_eq!(encode_indices(split_address(address, top)), address);
    }
}
