pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub struct Benefit {
    pub title: &'static str,
    pub body: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const HERO_TITLE: &str = "Maximize Your Software License Value";
pub const HERO_SUBHEADING: &str = "Get the best price for your unused software licenses with our fast, secure, and hassle-free selling process.";

pub static STEPS: [Step; 3] = [
    Step {
        icon: "fa-upload",
        title: "Upload License",
        body: "Provide details about your software licenses through our secure portal.",
    },
    Step {
        icon: "fa-search-dollar",
        title: "Get Valuation",
        body: "We'll analyze your licenses and provide a competitive valuation within 24 hours.",
    },
    Step {
        icon: "fa-money-bill-wave",
        title: "Get Paid",
        body: "Accept our offer and receive payment quickly through your preferred method.",
    },
];

pub static BENEFITS: [Benefit; 4] = [
    Benefit {
        title: "Best Prices",
        body: "We offer the most competitive rates in the market for your unused licenses.",
    },
    Benefit {
        title: "Fast Transactions",
        body: "Complete the entire process in as little as 48 hours from start to finish.",
    },
    Benefit {
        title: "Secure Process",
        body: "Your data and transactions are protected with enterprise-grade security.",
    },
    Benefit {
        title: "Expert Support",
        body: "Our team of licensing experts is available to guide you through every step.",
    },
];

pub static TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        quote: "I was amazed at how easy and profitable it was to sell my unused licenses through this service. The process was seamless and the payment was prompt.",
        author: "Sarah Johnson",
        role: "IT Director, TechCorp Solutions",
    },
    Testimonial {
        quote: "After trying other services, this platform offered me 30% more for my licenses. The customer support was exceptional throughout the entire process.",
        author: "Michael Chen",
        role: "CTO, InnovateSoft",
    },
];
