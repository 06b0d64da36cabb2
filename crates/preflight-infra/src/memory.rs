// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! sysinfo-based implementation of the ResidentMemoryProbe trait.

use preflight_core::platform::ResidentMemoryProbe;
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

/// Reads the resident set size of one process, by default the current one.
pub struct SysinfoMemoryProbe {
    system: System,
    pid: Pid,
}

impl SysinfoMemoryProbe {
    /// Creates a probe for the current process.
    ///
    /// Returns `None` on platforms where sysinfo cannot identify the current
    /// process.
    pub fn current_process() -> Option<Self> {
        match sysinfo::get_current_pid() {
            Ok(pid) => Some(Self::for_pid(pid)),
            Err(e) => {
                log::warn!("SysinfoMemoryProbe: cannot resolve current pid: {e}");
                None
            }
        }
    }

    /// Creates a probe for an arbitrary process, such as an out-of-process host.
    pub fn for_pid(pid: Pid) -> Self {
        Self {
            system: System::new(),
            pid,
        }
    }

    /// The process being measured.
    pub fn pid(&self) -> Pid {
        self.pid
    }
}

impl ResidentMemoryProbe for SysinfoMemoryProbe {
    fn resident_bytes(&mut self) -> Option<u64> {
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[self.pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        let bytes = self.system.process(self.pid).map(|process| process.memory());
        if bytes.is_none() {
            log::warn!("SysinfoMemoryProbe: process {} not found", self.pid);
        }
        bytes
    }
}
