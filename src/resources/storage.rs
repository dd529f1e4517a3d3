//! Shares, disks, array capacity and parity checks.

use crate::{
    Array, Disk, ParityCheck, Share, UnraidClient, UnraidResult,
    core::domain::{
        query::{ARRAY_QUERY, DISKS_QUERY, PARITY_CHECK_QUERY, SHARES_QUERY},
        schema::{
            array::ArrayQuery,
            disk::{DiskQuery, FsDisk, ParityDisk},
            parity_check::ParityCheckQuery,
            share::{ShareEntry, SharesQuery},
        },
    },
};

impl From<ShareEntry> for Share {
    fn from(share: ShareEntry) -> Self {
        Share {
            name: share.name,
            free: share.free,
            used: share.used,
            size: share.size,
            allocator: share.allocator,
            floor: share.floor,
        }
    }
}

impl From<ParityDisk> for Disk {
    fn from(disk: ParityDisk) -> Self {
        Disk {
            name: disk.name,
            status: disk.status,
            temp: disk.temp,
            fs_size: None,
            fs_free: None,
            fs_used: None,
            disk_type: disk.disk_type,
            id: disk.id,
            is_spinning: disk.is_spinning,
            vendor: None,
            model: None,
            serial_num: None,
            interface_type: None,
            smart_status: None,
            firmware_revision: None,
            num_errors: None,
            num_reads: None,
            num_writes: None,
        }
    }
}

impl From<FsDisk> for Disk {
    fn from(disk: FsDisk) -> Self {
        Disk {
            fs_size: disk.fs_size,
            fs_free: disk.fs_free,
            fs_used: disk.fs_used,
            ..Disk::from(disk.common)
        }
    }
}

impl From<DiskQuery> for Vec<Disk> {
    fn from(response: DiskQuery) -> Self {
        let array = response.array;
        let mut disks =
            Vec::with_capacity(array.disks.len() + array.caches.len() + array.parities.len());
        disks.extend(array.disks.into_iter().map(Disk::from));
        disks.extend(array.caches.into_iter().map(Disk::from));
        disks.extend(array.parities.into_iter().map(Disk::from));
        disks
    }
}

impl From<ArrayQuery> for Array {
    fn from(response: ArrayQuery) -> Self {
        let kilobytes = response.array.capacity.kilobytes;
        Array {
            state: response.array.state,
            capacity_free: kilobytes.free,
            capacity_used: kilobytes.used,
            capacity_total: kilobytes.total,
        }
    }
}

impl From<ParityCheckQuery> for ParityCheck {
    fn from(response: ParityCheckQuery) -> Self {
        let pc = response.array.parity_check_status;
        ParityCheck {
            status: pc.status,
            progress: pc.progress,
            errors: pc.errors,
            speed: pc.speed,
            duration: pc.duration,
            correcting: pc.correcting,
            running: pc.running,
            paused: pc.paused,
        }
    }
}

impl UnraidClient {
    /// Retrieves all user shares.
    pub async fn query_shares(&self) -> UnraidResult<Vec<Share>> {
        let response: SharesQuery = self.call_api(&SHARES_QUERY, None).await?;
        Ok(response.shares.into_iter().map(Share::from).collect())
    }

    /// Retrieves every disk known to the array as one flat list.
    ///
    /// Data disks come first, then cache pool members, then parity drives.
    /// Parity drives never carry filesystem usage.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or any disk has a status or
    /// type outside the known vocabulary.
    pub async fn query_disks(&self) -> UnraidResult<Vec<Disk>> {
        let response: DiskQuery = self.call_api(&DISKS_QUERY, None).await?;
        Ok(response.into())
    }

    /// Retrieves the array state and capacity (kilobytes).
    pub async fn query_array(&self) -> UnraidResult<Array> {
        let response: ArrayQuery = self.call_api(&ARRAY_QUERY, None).await?;
        Ok(response.into())
    }

    /// Retrieves the status of the current or most recent parity check.
    pub async fn query_parity_check(&self) -> UnraidResult<ParityCheck> {
        let response: ParityCheckQuery = self.call_api(&PARITY_CHECK_QUERY, None).await?;
        Ok(response.into())
    }
}
