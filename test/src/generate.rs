use kubeapi_types::{CreateDeployment, Labels, Port};
use rand::{rngs::StdRng, Rng, SeedableRng};

const IMAGES: &[&str] = &["golang", "nginx:1.27", "redis:7-alpine", "ghcr.io/acme/api:v2"];
const PORT_NAMES: &[&str] = &["http", "https", "api", "grpc", "metrics", "healthz"];
const LABEL_KEYS: &[&str] = &["app", "env", "team", "tier"];

/// Reproducible source of valid deployments: replicas >= 1, non-empty
/// image, 1 to 4 ports within 1-65535.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn valid(&mut self) -> CreateDeployment {
        let replicas = self.rng.random_range(1..=10);
        let image = IMAGES[self.rng.random_range(0..IMAGES.len())];

        let port_count = self.rng.random_range(1..=4);
        let ports = PORT_NAMES[..port_count]
            .iter()
            .map(|name| Port::new(*name, self.rng.random_range(1..=65535)))
            .collect();

        let label_count = self.rng.random_range(0..=LABEL_KEYS.len());
        let labels: Labels = LABEL_KEYS[..label_count]
            .iter()
            .map(|key| (key.to_string(), format!("v{}", self.rng.random_range(0..100))))
            .collect();

        CreateDeployment {
            id: None,
            replicas,
            image: image.to_string(),
            ports,
            labels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_deployments_are_valid() {
        let mut generator = Generator::new(7);
        for _ in 0..100 {
            let d = generator.valid();
            assert!(d.replicas >= 1);
            assert!(!d.image.is_empty());
            assert!(!d.ports.is_empty());
            assert!(d.ports.iter().all(|p| (1..=65535).contains(&p.port)));
            assert!(d.id.is_none());
        }
    }

    #[test]
    fn test_same_seed_same_deployments() {
        let mut a = Generator::new(42);
        let mut b = Generator::new(42);
        for _ in 0..10 {
            assert_eq!(a.valid(), b.valid());
        }
    }
}
