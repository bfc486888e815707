//! Hierarchical identifier derivation.
//!
//! Identifiers form a fixed hierarchy: 20 idcs, 500 hosts per idc (10,000
//! hosts globally), 500 applications, and a configurable number of services
//! per application. idc and host are uniform random draws; the application
//! is a pure function of the host (a host always runs the same application),
//! and service names are a pure function of the application and a service
//! index.
//!
//! All functions take the random source as an explicit argument; nothing
//! here keeps state.

use rand::Rng;
use xxhash_rust::xxh3::xxh3_64;

/// Number of distinct idcs (datacenters/zones).
pub const IDC_COUNT: u32 = 20;

/// Number of hosts per idc.
pub const HOSTS_PER_IDC: u32 = 500;

/// Number of distinct applications across all idcs.
pub const APP_COUNT: u64 = 500;

/// Exclusive upper bound of the random path id in generated urls.
pub const URL_PATH_IDS: u32 = 2000;

/// Draw a random idc, formatted `idc_<n>` with `n` in `[0, 20)`.
pub fn next_idc<R: Rng>(rng: &mut R) -> String {
    format!("idc_{}", rng.gen_range(0..IDC_COUNT))
}

/// Draw a random host within an idc, formatted `<idc>_host_<n>` with `n` in
/// `[0, 500)`.
///
/// Embedding the idc as a prefix makes host names globally unique across
/// idcs.
pub fn next_host<R: Rng>(rng: &mut R, idc: &str) -> String {
    format!("{idc}_host_{}", rng.gen_range(0..HOSTS_PER_IDC))
}

/// Derive the application running on a host, formatted `app_<n>` with `n`
/// in `[0, 500)`.
///
/// Deterministic by design: the same host always yields the same
/// application. The derivation is XXH3-64 over the UTF-8 bytes of the host
/// name, reduced modulo [`APP_COUNT`]; XXH3 is stable across platforms and
/// library releases, so app assignment is reproducible everywhere.
pub fn app_for_host(host: &str) -> String {
    format!("app_{}", xxh3_64(host.as_bytes()) % APP_COUNT)
}

/// Derive a service name, formatted `<app>_service_<index>`.
pub fn service_name(app: &str, index: usize) -> String {
    format!("{app}_service_{index}")
}

/// Draw a random url with a timestamp-based path, formatted
/// `http://127.0.0.1/helloworld/<minutes>/<r>` where `minutes` is the
/// timestamp floored to whole minutes and `r` is in `[0, 2000)`.
pub fn next_url<R: Rng>(rng: &mut R, ts_millis: i64) -> String {
    let minutes = ts_millis / 60_000;
    format!(
        "http://127.0.0.1/helloworld/{minutes}/{}",
        rng.gen_range(0..URL_PATH_IDS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_idc_format_and_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let idc = next_idc(&mut rng);
            let n: u32 = idc.strip_prefix("idc_").unwrap().parse().unwrap();
            assert!(n < IDC_COUNT);
        }
    }

    #[test]
    fn test_host_format_and_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let idc = next_idc(&mut rng);
            let host = next_host(&mut rng, &idc);
            let n: u32 = host
                .strip_prefix(&format!("{idc}_host_"))
                .unwrap()
                .parse()
                .unwrap();
            assert!(n < HOSTS_PER_IDC);
        }
    }

    #[test]
    fn test_app_is_pure_function_of_host() {
        assert_eq!(app_for_host("idc_3_host_17"), app_for_host("idc_3_host_17"));
    }

    #[test]
    fn test_app_format_and_bounds() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let idc = next_idc(&mut rng);
            let host = next_host(&mut rng, &idc);
            let app = app_for_host(&host);
            let n: u64 = app.strip_prefix("app_").unwrap().parse().unwrap();
            assert!(n < APP_COUNT);
        }
    }

    #[test]
    fn test_service_name() {
        assert_eq!(service_name("app_42", 0), "app_42_service_0");
        assert_eq!(service_name("app_42", 19), "app_42_service_19");
    }

    #[test]
    fn test_url_format_and_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let ts_millis = 1_700_000_123_456;

        for _ in 0..200 {
            let url = next_url(&mut rng, ts_millis);
            let path = url.strip_prefix("http://127.0.0.1/helloworld/").unwrap();
            let (minutes, r) = path.split_once('/').unwrap();

            assert_eq!(minutes.parse::<i64>().unwrap(), ts_millis / 60_000);
            assert!(r.parse::<u32>().unwrap() < URL_PATH_IDS);
        }
    }

    #[test]
    fn test_deterministic_draws_with_same_seed() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(next_idc(&mut rng1), next_idc(&mut rng2));
        assert_eq!(next_host(&mut rng1, "idc_0"), next_host(&mut rng2, "idc_0"));
        assert_eq!(next_url(&mut rng1, 60_000), next_url(&mut rng2, 60_000));
    }
}
