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


#![no_main]

use libfuzzer_sys::fuzz_target;
use saorsa_dip::{WordDictionary, decode_from_address, encode_to_address};
use std::sync::OnceLock;

static DICT: OnceLock<WordDictionary> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let dict = DICT.get_or_init(|| WordDictionary::english().expect("bundled word list"));

    // Arbitrary bytes as a word list must never panic
    let _ = WordDictionary::from_bytes(data);

    if let Ok(s) = std::str::from_utf8(data) {
        // Anything that encodes must decode back to the same address
        if let Some(address) = encode_to_address(s, dict) {
            for top in [false, true] {
                let mnemonic = decode_from_address(&address.to_string(), top, dict)
                    .expect("encoder output is a valid IPv4 address");
                assert_eq!(encode_to_address(&mnemonic.to_string(), dict), Some(address));
            }
        }

        let _ = decode_from_address(s, false, dict);
        let _ = decode_from_address(s, true, dict);
    }
});
