
use skyward_test_utils::prelude::*;

use super::*;
