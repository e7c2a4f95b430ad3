// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod clock;
pub use clock::Clock;

mod key_value_storage;
pub use key_value_storage::KeyValueStorage;
