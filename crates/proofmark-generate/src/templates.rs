// crates/proofmark-generate/src/templates.rs
//
// Prewritten long-form answers used by the deterministic content generator
// when every text provider is unavailable.

/// Placeholder substituted with the verbatim prompt in [`GENERAL`].
pub const PROMPT_PLACEHOLDER: &str = "{prompt}";

pub const GIRLS: [&str; 2] = [
    r#"## Understanding Girls: Development and Empowerment

Girls represent a diverse and remarkable group of young individuals, each with unique talents, dreams, and potential. Their journey from childhood through adolescence involves significant physical, emotional, and social development.

**Key Developmental Stages:**
- **Early Childhood (2-6 years)**: Rapid cognitive development, language acquisition, and beginning of social relationships
- **Middle Childhood (7-11 years)**: Developing interests, academic skills, and deeper friendships
- **Adolescence (12-18 years)**: Physical changes, identity formation, and increasing independence

**Strengths and Capabilities:**
Girls often demonstrate exceptional abilities in various areas:
• Communication and emotional intelligence
• Creative expression through arts and writing
• Academic achievement and problem-solving
• Leadership and collaborative skills
• Resilience and adaptability

**Supporting Healthy Development:**
- Encouraging diverse interests beyond stereotypes
- Building confidence and self-esteem
- Providing positive role models and mentorship
- Creating safe spaces for self-expression
- Supporting educational and career aspirations

**Modern Opportunities:**
Today's girls have unprecedented access to education, technology, and global connections. They're breaking barriers in STEM fields, sports, arts, and leadership positions worldwide.

**The Future is Female:**
With proper support and opportunities, girls develop into strong, capable women who can shape a better future for all. Their unique perspectives and talents enrich our world in countless ways."#,
    r#"## Girls in Contemporary Society

Girls today are growing up in a world of rapid change and expanding possibilities. Understanding their experiences helps us support their journey to becoming confident, capable individuals.

**Educational Excellence:**
Modern girls are achieving remarkable success in education. They often excel in:
- Science, Technology, Engineering, and Mathematics (STEM)
- Language arts and communication
- Creative and performing arts
- Sports and physical activities

**Digital Natives:**
Growing up with technology, today's girls are comfortable with digital tools and platforms. They use technology for learning, creativity, and social connection while developing important digital literacy skills.

**Social and Emotional Intelligence:**
Girls typically develop strong social awareness and emotional intelligence. They build meaningful friendships, navigate complex social situations, and develop empathy and understanding for others.

**Leadership Potential:**
From classroom projects to community initiatives, girls demonstrate natural leadership abilities. They collaborate effectively, communicate clearly, and inspire others through their actions and ideas.

**Challenges and Support:**
While facing unique challenges including social pressures and gender stereotypes, girls show remarkable resilience. Supportive environments, positive role models, and equal opportunities help them overcome obstacles and reach their full potential.

**Celebrating Diversity:**
Every girl has unique talents and interests waiting to be discovered. Whether artistic, athletic, academic, or technical, recognizing and nurturing these individual strengths builds confidence and self-worth."#,
];

pub const BOYS: [&str; 1] = [r#"## Understanding Boys: Growth and Development

Boys represent a diverse group of young individuals with unique personalities, interests, and developmental paths. Their journey involves physical, emotional, and social growth through various life stages.

**Developmental Milestones:**
- **Early Years**: Rapid physical growth, language development, and exploration
- **School Age**: Developing friendships, academic skills, and personal interests
- **Adolescence**: Physical changes, identity formation, and increasing independence

**Common Interests:**
Boys often enjoy diverse activities including:
• Sports and physical games
• Technology and video games
• Building and creating things
• Science and exploration
• Adventure and outdoor activities

**Educational Journey:**
Boys typically thrive with hands-on learning experiences and clear goals. Many excel in subjects that allow for experimentation, problem-solving, and practical application of knowledge.

**Emotional Development:**
Supporting boys' emotional intelligence involves encouraging expression of feelings, developing empathy, and teaching healthy communication skills. Emotional awareness helps build strong relationships and resilience.

**Modern Challenges:**
Today's boys navigate digital landscapes, changing social norms, and evolving expectations. Guidance in digital citizenship, respect for diversity, and personal responsibility supports their healthy development.

**Individuality and Potential:**
Each boy possesses unique talents and capabilities. Recognizing and nurturing individual strengths—whether academic, artistic, athletic, or technical—helps build confidence and self-esteem.

**Future Contributions:**
With proper support and opportunities, boys develop into capable, responsible individuals who can make positive contributions to their communities and the wider world."#];

pub const BLOCKCHAIN: [&str; 1] = [r#"## Blockchain Technology: The Future of Digital Trust

Blockchain represents one of the most significant technological innovations since the internet. It's a decentralized digital ledger that records transactions across multiple computers, ensuring security, transparency, and immutability.

**How Blockchain Works:**
- **Decentralized Network**: No single entity controls the data
- **Cryptographic Security**: Advanced encryption protects all transactions
- **Immutable Records**: Once recorded, data cannot be altered
- **Distributed Consensus**: Network participants agree on transaction validity

**Key Features:**
• Transparency: All participants can view transactions
• Security: Cryptographic hashing prevents tampering
• Efficiency: Reduces intermediaries and processing time
• Trust: Creates verifiable digital records

**Applications Beyond Cryptocurrency:**
- Supply chain management and tracking
- Digital identity verification
- Smart contracts and automated agreements
- Secure voting systems
- Healthcare records management
- Intellectual property protection

**Benefits for Content Authentication:**
Blockchain provides perfect solutions for content verification because it creates tamper-proof timestamps and ownership records. Each piece of content receives a unique digital fingerprint stored permanently on the blockchain.

**Future Potential:**
As blockchain technology evolves, it could transform industries including finance, healthcare, government, education, and creative arts. Its ability to create trust in digital interactions makes it fundamental to our technological future.

**Challenges and Considerations:**
While promising, blockchain faces challenges including scalability, energy consumption, regulatory frameworks, and widespread adoption. Ongoing development addresses these issues while expanding practical applications."#];

pub const ARTIFICIAL_INTELLIGENCE: [&str; 1] = [r#"## Artificial Intelligence: Transforming Our World

Artificial Intelligence has evolved from theoretical concept to practical technology that impacts nearly every aspect of modern life. AI systems can learn, reason, and perform tasks that typically require human intelligence.

**Core AI Technologies:**
- **Machine Learning**: Systems that learn from data patterns
- **Natural Language Processing**: Understanding and generating human language
- **Computer Vision**: Interpreting and analyzing visual information
- **Neural Networks**: Brain-inspired computing architectures
- **Robotics**: Intelligent physical systems

**Current Applications:**
• Healthcare: Diagnostics, treatment planning, and drug discovery
• Education: Personalized learning and intelligent tutoring
• Business: Customer service, data analysis, and automation
• Transportation: Autonomous vehicles and traffic management
• Entertainment: Content recommendation and creation
• Security: Fraud detection and threat analysis

**AI in Content Creation:**
Modern AI systems can generate text, images, music, and video content. These capabilities assist human creators while raising important questions about authenticity, ownership, and creative expression.

**Ethical Considerations:**
As AI becomes more powerful, we must address important questions about:
- Privacy and data protection
- Algorithmic bias and fairness
- Job displacement and workforce transformation
- Accountability and transparency
- Security and misuse prevention

**The Future of AI:**
AI will continue to augment human capabilities rather than replace them. The most successful applications combine human creativity with AI's computational power, creating new possibilities for innovation and problem-solving across all fields."#];

/// Generic answer for prompts that match no topic.
pub const GENERAL: &str = r#"## Comprehensive Analysis: {prompt}

This topic encompasses multiple important dimensions worth exploring in depth. Let's examine the key aspects and considerations.

**Core Concepts:**
Understanding the fundamental principles and terminology provides a solid foundation for deeper exploration. The subject involves interconnected elements that work together to create meaningful outcomes and applications.

**Historical Context:**
The development of this field has been shaped by various historical factors, technological advancements, and evolving societal needs. Tracing this evolution helps understand current applications and future directions.

**Current Applications:**
Today, this concept finds practical implementation across multiple domains:
- Technological innovation and development
- Social and cultural impacts
- Economic considerations and business applications
- Educational and research implications
- Environmental and sustainability aspects

**Key Benefits:**
The implementation of these principles offers significant advantages including improved efficiency, enhanced capabilities, new opportunities for growth, and innovative solutions to complex challenges.

**Challenges and Considerations:**
Like any significant development, there are important considerations including adoption barriers, ethical implications, practical implementation issues, and potential unintended consequences.

**Future Outlook:**
The ongoing evolution of this field promises exciting developments that could transform how we approach related challenges and opportunities in the coming years. Emerging trends suggest continued growth and expanding applications.

This analysis provides a comprehensive overview while acknowledging the dynamic nature of the subject and its continuing evolution across multiple dimensions of modern life and technology."#;

/// Render the generic template for a prompt.
pub fn general(prompt: &str) -> String {
    GENERAL.replacen(PROMPT_PLACEHOLDER, prompt, 1)
}
