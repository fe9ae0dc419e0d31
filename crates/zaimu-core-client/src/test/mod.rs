// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use constant_time_provider::ConstantTimeProvider;
pub use incrementing_id_provider::IncrementingIdProvider;
pub use mock_app_dependencies::MockAppDependencies;

mod constant_time_provider;
mod mock_app_dependencies;

pub mod mock_data {
    pub use super::mock_app_dependencies::{
        mock_display_name as display_name, mock_reference_date as reference_date,
        mock_user_id as user_id,
    };
}
