//! Pre-built mock filesystem scenarios for testing.

use super::filesystem::MockFs;

impl MockFs {
    /// A laptop with one battery, one thermal zone and a busy-ish CPU.
    pub fn typical_laptop() -> Self {
        let mut fs = Self::new();

        fs.add_file("/proc/uptime", "93784.21 301245.90\n");
        fs.add_file("/proc/loadavg", "0.15 0.10 0.05 1/150 1234\n");
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapCached:            0 kB
Active:          4096000 kB
Inactive:        2048000 kB
SwapTotal:       4096000 kB
SwapFree:        3072000 kB
Dirty:              1024 kB
Writeback:             0 kB
",
        );
        fs.add_file(
            "/proc/stat",
            "\
cpu  10000 500 3000 80000 1000 200 100 0 0 0
cpu0 5000 250 1500 40000 500 100 50 0 0 0
cpu1 5000 250 1500 40000 500 100 50 0 0 0
intr 1000000 50 0 0 0 0 0 0 0 1 0 0 0 100 0 0 1000
ctxt 500000
btime 1700000000
processes 10000
procs_running 2
procs_blocked 0
",
        );
        fs.add_file("/proc/sys/kernel/hostname", "thinkpad\n");
        fs.add_file("/proc/sys/kernel/osrelease", "6.8.0-45-generic\n");
        fs.add_file("/proc/sys/kernel/random/entropy_avail", "256\n");

        fs.add_file("/sys/class/power_supply/BAT0/capacity", "87\n");
        fs.add_file("/sys/class/power_supply/BAT0/status", "Discharging\n");
        fs.add_file("/sys/class/power_supply/AC/online", "0\n");
        fs.add_file("/sys/class/thermal/thermal_zone0/temp", "47500\n");

        fs
    }

    /// A headless server: no battery, no thermal zones, no swap.
    pub fn bare_server() -> Self {
        let mut fs = Self::new();

        fs.add_file("/proc/uptime", "3000.00 11000.00\n");
        fs.add_file("/proc/loadavg", "3.42 2.91 2.10 6/820 99123\n");
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       65536000 kB
MemFree:         1024000 kB
MemAvailable:    8192000 kB
Buffers:          256000 kB
Cached:          6000000 kB
SwapTotal:             0 kB
SwapFree:              0 kB
",
        );
        fs.add_file(
            "/proc/stat",
            "cpu  900000 0 100000 1000000 0 0 0 0 0 0\nctxt 1\n",
        );
        fs.add_file("/proc/sys/kernel/hostname", "db-01\n");
        fs.add_file("/proc/sys/kernel/osrelease", "5.15.0-118-generic\n");
        fs.add_dir("/sys/class/power_supply");

        fs
    }
}
