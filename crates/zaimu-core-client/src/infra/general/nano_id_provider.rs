// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use nanoid::nanoid;
use zaimu_realtime::IdProvider;

#[derive(Default)]
pub struct NanoIdProvider {}

impl IdProvider for NanoIdProvider {
    fn new_id(&self) -> String {
        let chars = ('a'..='z')
            .chain('A'..='Z')
            .chain('0'..='9')
            .collect::<Vec<char>>();
        nanoid!(8, &chars)
    }
}
