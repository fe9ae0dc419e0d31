// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use zaimu_utils::id_u64;

id_u64!(
    /// A user's id as assigned by the backend.
    UserId
);

id_u64!(
    /// The id of a chat channel.
    ChannelId
);

id_u64!(
    /// The id of a task.
    TaskId
);
