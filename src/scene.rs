use clap::ValueEnum;

/// Social relationship category driving the tone of the suggested replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scene {
    /// 暧昧/相亲对象
    Crush,
    /// 普通朋友
    Friend,
    /// 领导/同事
    Colleague,
    /// 刚认识的陌生人
    Stranger,
}

impl Scene {
    /// The fixed Chinese label shown to the model in the prompt.
    pub fn label(self) -> &'static str {
        match self {
            Self::Crush => "暧昧/相亲对象",
            Self::Friend => "普通朋友",
            Self::Colleague => "领导/同事",
            Self::Stranger => "刚认识的陌生人",
        }
    }

    pub const ALL: [Scene; 4] = [Self::Crush, Self::Friend, Self::Colleague, Self::Stranger];
}

#[cfg(test)]
mod tests {
    use super::Scene;

    #[test]
    fn labels_are_the_four_fixed_categories() {
        let labels: Vec<&str> = Scene::ALL.iter().map(|scene| scene.label()).collect();
        assert_eq!(
            labels,
            ["暧昧/相亲对象", "普通朋友", "领导/同事", "刚认识的陌生人"]
        );
    }
}
