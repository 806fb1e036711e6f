//! The shipped portfolio tree.
//!
//! One factory builds the whole tree in declaration order; callers pass it
//! into a [`TerminalContext`](crate::context::TerminalContext) explicitly,
//! so nothing in the interpreter depends on this module.

use crate::vfs::{FsNode, VirtualFileSystem};

/// Resource the `export` verb asks the UI to download.
pub const RESUME_URL: &str = "/resume.pdf";
pub const RESUME_DOWNLOAD_NAME: &str = "termfolio_resume.pdf";

const README: &str = "\
Welcome to termfolio
This is my portfolio website
Type 'help' for a list of commands.
If you are more comfortable with a GUI, switch to it with the command: 'gui'";

const ABOUT_ME: &str = "\
Myself Aditya, I would define myself as a quick learner and a person who is \
eager to explore new technologies and environments, passionate for innovative \
solutions and programming. I embrace challenges as opportunities for growth, \
constantly seeking to expand my knowledge and skill set. I am ready to \
contribute with my adaptable nature and enthusiasm to any project or team.";

const EDUCATION: &str = "\
Education
 Dr. D.Y. Patil Institute of Technology, Pimpri, Pune
 Bachelor of Engineering - BE, Computer Engineering
 Dec, 2021 - Dec, 2025
 CGPA: 8.7/10
";

const EXPERIENCE: &str = "\
Experience
  Association of Computer Engineering Students, DIT
    Aug, 2022 - Jul, 2023
    Jr. Event Manager @ ACES
    Led as Event Manager for the college club, ACES, orchestrating successful
    and engaging events that enhanced the campus community.

  Google Developer Groups, DIT
    Blockchain Co-lead
    Sept, 2023 - current
    Conducted multiple blockchain workshops and sessions, driving hands-on
    learning and developer engagement.
";

const ACHIEVEMENTS: &str = "\
ACHIEVEMENTS
  - Dean's List - Fall 2023, Spring 2024
  - Winner, University Hackathon 2023 (Blockchain Track)
  - Certified Ethereum Developer
";

const SKILLS: &str = "\
SKILLS
Programming Languages:
  - Python (Advanced), JavaScript (Node.js, React, Next.js - Advanced)
  - Java (Intermediate), C++ (Intermediate), Solidity (Advanced), Rust (Beginner)

Blockchain Technologies:
  - Ethereum, Polygon, Bitcoin (Conceptual Understanding)
  - Smart Contracts: Solidity, OpenZeppelin, ERC20, ERC721, ERC1155
  - Development Tools: Hardhat, Truffle, Ganache, Remix IDE
  - Libraries: Web3.js, Ethers.js

Web Development:
  - Frontend: React, Next.js, HTML5, CSS3, TailwindCSS
  - Backend: Node.js, Express.js
  - APIs: RESTful APIs, GraphQL (Basic)

Databases:
  - SQL: PostgreSQL, MySQL
  - NoSQL: MongoDB

DevOps & Tools:
  - Git, GitHub, GitLab, Docker, Kubernetes (Basic understanding)
  - CI/CD (GitHub Actions - Basic)
  - Cloud: AWS (EC2, S3, Lambda - Basic), Firebase
  - Operating Systems: Linux (Ubuntu), macOS, Windows

Soft Skills:
  - Problem Solving, Analytical Thinking, Team Collaboration, Communication
  - Agile/Scrum methodologies
";

const CONTACTS: &str = "\
Contact Info:
Email: adityarekhe1030@gmail.com
LinkedIn: https://www.linkedin.com/in/aditya-rekhe-94b27122a/
GitHub: https://github.com/Geek-ASR
Location: Pune, Maharashtra
";

const RESUME: &str = "\
Aditya Rekhe
adityarekhe1030@gmail.com
LinkedIn: https://www.linkedin.com/in/aditya-rekhe-94b27122a/
GitHub: https://github.com/Geek-ASR
Location: Pune, Maharashtra

Education
  Dr. D.Y. Patil Institute of Technology, Pimpri, Pune
    Bachelor of Engineering - BE, Computer Engineering
    Dec, 2021 - Dec, 2025
    CGPA: 8.7/10

SKILLS
  Programming Languages: Python, JavaScript (Node.js, React, Next.js), Java,
  C++, Solidity, Rust
  Blockchain: Ethereum, Polygon, Smart Contracts (Solidity, OpenZeppelin),
  Hardhat, Web3.js, Ethers.js, IPFS
  Web: React, Next.js, Node.js, Express.js, RESTful APIs
  Databases: PostgreSQL, MySQL, MongoDB
  DevOps: Git, Docker, Kubernetes, GitHub Actions, AWS, Firebase

Experience
  Association of Computer Engineering Students, DIT
    Aug, 2022 - Jul, 2023
    Jr. Event Manager @ ACES

  Google Developer Groups, DIT
    Blockchain Co-lead
    Sept, 2023 - current

PROJECTS
  Decentralized Identity Management (Ethereum)
  NFT Marketplace (Polygon)
  termfolio (This Website)

ACHIEVEMENTS
  - Dean's List - Fall 2023, Spring 2024
  - Winner, University Hackathon 2023 (Blockchain Track)
";

const PROJECT_IDENTITY: &str = "\
Project Name: Decentralized Identity Management
Description: A platform built on Ethereum allowing users to own and control
             their digital identity.
Technologies: Solidity, Hardhat, Ethers.js, React, IPFS
Role: Lead Developer
Key Features:
  - Smart contracts for identity creation and attribute management.
  - Verifiable credentials stored on IPFS.
  - User-friendly React interface for interaction.
Status: MVP Completed
GitHub: github.com/Geek-ASR/decentralized-id
";

const PROJECT_NFT: &str = "\
Project Name: NFT Marketplace (Polygon)
Description: A simple marketplace for minting, buying, and selling NFTs on
             the Polygon network.
Technologies: Solidity, OpenZeppelin Contracts, Next.js, Ethers.js, Pinata
Role: Full-Stack Developer
Key Features:
  - ERC721 token minting.
  - Fixed-price sales and basic auction mechanism.
  - Browsing and filtering NFTs.
Status: In Development
GitHub: github.com/Geek-ASR/nft-marketplace
";

pub fn portfolio() -> VirtualFileSystem {
    VirtualFileSystem::new(vec![
        FsNode::text_file("README.md", README),
        FsNode::text_file("about_me.txt", ABOUT_ME),
        FsNode::text_file("education.txt", EDUCATION),
        FsNode::text_file("experience.txt", EXPERIENCE),
        FsNode::text_file("achievements.txt", ACHIEVEMENTS),
        FsNode::resource("resume.pdf", RESUME_URL, "application/pdf"),
        FsNode::text_file("resume.txt", RESUME),
        FsNode::dir(
            "projects",
            vec![
                FsNode::text_file("decentralized_identity.txt", PROJECT_IDENTITY),
                FsNode::text_file("nft_marketplace.txt", PROJECT_NFT),
                FsNode::resource(
                    "project_details.pdf",
                    "/blockchain_project_details.pdf",
                    "application/pdf",
                ),
            ],
        ),
        FsNode::text_file("skills.txt", SKILLS),
        FsNode::text_file("contacts.txt", CONTACTS),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::FsNode;

    #[test]
    fn shipped_tree_has_the_expected_layout() {
        let fs = portfolio();
        assert!(fs.resolve("~/README.md").is_some());
        assert!(fs.resolve("~/projects").map(FsNode::is_dir).unwrap_or(false));
        assert!(fs.resolve("~/projects/decentralized_identity.txt").is_some());
        // the resume PDF is a url-only resource
        match fs.resolve("~/resume.pdf") {
            Some(FsNode::File { content, url, .. }) => {
                assert!(content.is_none());
                assert_eq!(url.as_deref(), Some(RESUME_URL));
            }
            other => panic!("unexpected node: {:?}", other),
        }
    }

    #[test]
    fn sibling_names_are_unique() {
        fn check(node: &FsNode) {
            if let FsNode::Directory { children, .. } = node {
                for (i, a) in children.iter().enumerate() {
                    for b in &children[i + 1..] {
                        assert_ne!(a.name(), b.name(), "duplicate sibling {}", a.name());
                    }
                }
                children.iter().for_each(check);
            }
        }
        check(portfolio().root());
    }
}
