//! The literal GraphQL documents sent to the server.
//!
//! Field names and nesting must match the server schema exactly.

pub(super) const SERVER_INFO: &str = r#"
query ServerInfo {
  server {
    localurl
    name
  }
  info {
    versions {
      core {
        unraid
      }
    }
  }
}
"#;

pub(super) const METRICS: &str = r#"
query Metrics {
  metrics {
    memory {
      free
      total
      percentTotal
      active
      available
    }
    cpu {
      percentTotal
    }
  }
}
"#;

pub(super) const SHARES: &str = r#"
query Shares {
  shares {
    name
    free
    used
    size
    allocator
    floor
  }
}
"#;

pub(super) const DISKS: &str = r#"
query Disks {
  array {
    caches {
      name
      status
      temp
      fsSize
      fsFree
      fsUsed
      type
      id
      isSpinning
    }
    disks {
      name
      status
      temp
      fsSize
      fsFree
      fsUsed
      fsType
      type
      id
      isSpinning
    }
    parities {
      name
      status
      temp
      type
      id
      isSpinning
    }
  }
}
"#;

pub(super) const ARRAY: &str = r#"
query Array {
  array {
    state
    capacity {
      kilobytes {
        free
        used
        total
      }
    }
  }
}
"#;

pub(super) const VMS: &str = r#"
query VMs {
  vms {
    domain {
      id
      name
      state
    }
  }
}
"#;

pub(super) const DOCKER: &str = r#"
query Docker {
  docker {
    containers {
      id
      names
      state
      image
      autoStart
    }
  }
}
"#;

pub(super) const PARITY_CHECK: &str = r#"
query ParityCheck {
  array {
    parityCheckStatus {
      status
      progress
      errors
      speed
      duration
      correcting
      paused
      running
    }
  }
}
"#;

pub(super) const UPS: &str = r#"
query UPS {
  upsDevices {
    id
    name
    model
    status
    battery {
      chargeLevel
      estimatedRuntime
      health
    }
    power {
      inputVoltage
      outputVoltage
      loadPercentage
    }
  }
}
"#;

pub(super) const REGISTRATION: &str = r#"
query Registration {
  registration {
    id
    type
    state
    expiration
    updateExpiration
  }
}
"#;

pub(super) const FLASH: &str = r#"
query Flash {
  flash {
    id
    guid
    vendor
    product
  }
}
"#;

pub(super) const VM_START: &str = r#"
mutation StartVM($id: PrefixedID!) {
  vm {
    start(id: $id) {
      id
      state
    }
  }
}
"#;

pub(super) const VM_STOP: &str = r#"
mutation StopVM($id: PrefixedID!) {
  vm {
    stop(id: $id) {
      id
      state
    }
  }
}
"#;

pub(super) const VM_REBOOT: &str = r#"
mutation RebootVM($id: PrefixedID!) {
  vm {
    reboot(id: $id) {
      id
      state
    }
  }
}
"#;

pub(super) const VM_PAUSE: &str = r#"
mutation PauseVM($id: PrefixedID!) {
  vm {
    pause(id: $id) {
      id
      state
    }
  }
}
"#;

pub(super) const VM_RESUME: &str = r#"
mutation ResumeVM($id: PrefixedID!) {
  vm {
    resume(id: $id) {
      id
      state
    }
  }
}
"#;

pub(super) const VM_FORCE_STOP: &str = r#"
mutation ForceStopVM($id: PrefixedID!) {
  vm {
    forceStop(id: $id) {
      id
      state
    }
  }
}
"#;

pub(super) const DOCKER_START: &str = r#"
mutation StartContainer($id: PrefixedID!) {
  docker {
    start(id: $id) {
      id
      state
    }
  }
}
"#;

pub(super) const DOCKER_STOP: &str = r#"
mutation StopContainer($id: PrefixedID!) {
  docker {
    stop(id: $id) {
      id
      state
    }
  }
}
"#;
