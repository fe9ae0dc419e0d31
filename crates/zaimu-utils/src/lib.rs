// zaimu-core-client/zaimu-utils
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

mod id_string_macro;
mod id_u64_macro;
