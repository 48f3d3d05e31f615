/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Umbrella crate re-exporting the workspace members.

pub use lina_linalg as linalg;
pub use lina_geometry as geometry;
pub use lina_tasks as tasks;
